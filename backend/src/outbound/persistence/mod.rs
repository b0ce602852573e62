//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the repository ports backed by PostgreSQL
//! via `diesel-async` with `bb8` connection pooling. The adapters are
//! thin: they translate between Diesel rows and domain entities and map
//! database errors to port errors, nothing more. Row structs and schema
//! definitions stay private to this module.

mod diesel_company_repository;
mod diesel_error_mapping;
mod diesel_transfer_repository;
mod models;
mod pool;
mod schema;

pub use diesel_company_repository::DieselCompanyRepository;
pub use diesel_transfer_repository::DieselTransferRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
