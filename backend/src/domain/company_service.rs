//! Company application service.
//!
//! Implements the company driving ports over the repository port. The
//! service owns the single error translation from repository taxonomy to
//! the boundary envelope; it adds no retries and swallows nothing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CompanyCommand, CompanyQuery, CompanyRepository, CompanyRepositoryError,
};
use crate::domain::{Company, CompanyDraft, DomainError, ReportingWindow};

pub(crate) fn map_company_repository_error(error: CompanyRepositoryError) -> DomainError {
    match error {
        CompanyRepositoryError::Connection { message } | CompanyRepositoryError::Query { message } => {
            DomainError::internal(format!("company repository error: {message}"))
        }
        CompanyRepositoryError::Rejected { message } => DomainError::invalid_request(message),
        CompanyRepositoryError::Unavailable { message } => {
            DomainError::upstream_unavailable(message)
        }
    }
}

/// Company use cases: registration and windowed listing.
#[derive(Clone)]
pub struct CompanyService<R: ?Sized> {
    companies: Arc<R>,
}

impl<R: ?Sized> CompanyService<R> {
    /// Create the service over a company repository.
    pub fn new(companies: Arc<R>) -> Self {
        Self { companies }
    }
}

#[async_trait]
impl<R> CompanyCommand for CompanyService<R>
where
    R: CompanyRepository + ?Sized,
{
    async fn register_company(&self, draft: CompanyDraft) -> Result<Company, DomainError> {
        let company = self
            .companies
            .create(&draft)
            .await
            .map_err(map_company_repository_error)?;

        tracing::info!(
            company_id = %company.id(),
            company_type = %company.company_type(),
            "company registered"
        );
        Ok(company)
    }
}

#[async_trait]
impl<R> CompanyQuery for CompanyService<R>
where
    R: CompanyRepository + ?Sized,
{
    async fn companies_registered_in(
        &self,
        window: ReportingWindow,
    ) -> Result<Vec<Company>, DomainError> {
        self.companies
            .find_registered_between(&window)
            .await
            .map_err(map_company_repository_error)
    }
}

#[cfg(test)]
#[path = "company_service_tests.rs"]
mod tests;
