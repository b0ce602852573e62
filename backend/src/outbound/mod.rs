//! Outbound adapters: PostgreSQL persistence and the remote write delegate.

pub mod persistence;
pub mod remote_write;
