//! Port abstraction for company persistence adapters and their errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Company, CompanyDraft, ReportingWindow};

use super::define_port_error;

define_port_error! {
    /// Errors raised by company repository adapters.
    ///
    /// The `Rejected` and `Unavailable` variants exist for implementations
    /// that delegate writes to a remote service: they preserve the remote
    /// failure taxonomy so the service layer can map it to the right
    /// response class instead of collapsing everything into an internal
    /// error.
    pub enum CompanyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "company repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "company repository query failed: {message}",
        /// A delegated write was rejected as invalid by the remote end.
        Rejected { message: String } =>
            "company write rejected: {message}",
        /// A delegated write could not reach the remote end or it failed.
        Unavailable { message: String } =>
            "company write delegate unavailable: {message}",
    }
}

/// Port for company writes and windowed reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Persist a company, generating its identifier and defaulting
    /// `created_at` to the persistence instant when the draft omits it.
    async fn create(&self, draft: &CompanyDraft) -> Result<Company, CompanyRepositoryError>;

    /// Companies with `created_at` inside the window, both bounds
    /// included, ascending by `created_at`.
    async fn find_registered_between(
        &self,
        window: &ReportingWindow,
    ) -> Result<Vec<Company>, CompanyRepositoryError>;

    /// Whether a company with the given id exists.
    async fn exists_by_id(&self, id: &Uuid) -> Result<bool, CompanyRepositoryError>;
}

/// Fixture implementation for wiring paths that never touch persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompanyRepository;

#[async_trait]
impl CompanyRepository for FixtureCompanyRepository {
    async fn create(&self, draft: &CompanyDraft) -> Result<Company, CompanyRepositoryError> {
        Ok(Company::new(
            Uuid::new_v4(),
            draft.name.clone(),
            draft.company_type,
            draft.created_at.unwrap_or_else(chrono::Utc::now),
        ))
    }

    async fn find_registered_between(
        &self,
        _window: &ReportingWindow,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        Ok(Vec::new())
    }

    async fn exists_by_id(&self, _id: &Uuid) -> Result<bool, CompanyRepositoryError> {
        Ok(false)
    }
}
