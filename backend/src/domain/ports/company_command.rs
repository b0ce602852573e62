//! Driving port for company mutations.

use async_trait::async_trait;

use crate::domain::{Company, CompanyDraft, DomainError};

/// Driving port for registering companies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyCommand: Send + Sync {
    /// Register a company and return the persisted entity.
    ///
    /// Storage and delegate failures surface as [`DomainError`] values
    /// already translated for the boundary; there are no retries.
    async fn register_company(&self, draft: CompanyDraft) -> Result<Company, DomainError>;
}

/// Fixture command for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompanyCommand;

#[async_trait]
impl CompanyCommand for FixtureCompanyCommand {
    async fn register_company(&self, draft: CompanyDraft) -> Result<Company, DomainError> {
        Ok(Company::new(
            uuid::Uuid::new_v4(),
            draft.name,
            draft.company_type,
            draft.created_at.unwrap_or_else(chrono::Utc::now),
        ))
    }
}
