//! Port for the remote company-write delegate.
//!
//! Implementations perform a timed network call to an external endpoint
//! that owns company creation. The error taxonomy mirrors what the
//! boundary needs to surface: client rejection, remote failure, and
//! protocol mismatches.

use async_trait::async_trait;

use crate::domain::{Company, CompanyDraft};

use super::define_port_error;

define_port_error! {
    /// Failures raised by remote company writer adapters.
    pub enum CompanyWriterError {
        /// The call exceeded the configured timeout.
        Timeout { message: String } =>
            "company writer timed out: {message}",
        /// The endpoint could not be reached at all.
        Transport { message: String } =>
            "company writer transport failed: {message}",
        /// The remote rejected the request as invalid (client error).
        InvalidInput { message: String } =>
            "company writer rejected input: {message}",
        /// The remote failed while handling the request (server error).
        Upstream { message: String } =>
            "company writer upstream failure: {message}",
        /// The remote answered with an unexpected status class.
        Protocol { message: String } =>
            "company writer protocol mismatch: {message}",
        /// The response body could not be decoded into a company.
        Decode { message: String } =>
            "company writer response undecodable: {message}",
    }
}

/// Port for delegating company creation to a remote service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyWriter: Send + Sync {
    /// Create a company remotely and return the materialised entity.
    async fn create(&self, draft: &CompanyDraft) -> Result<Company, CompanyWriterError>;
}
