//! Driving port for company reads.

use async_trait::async_trait;

use crate::domain::{Company, DomainError, ReportingWindow};

/// Driving port for windowed company queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyQuery: Send + Sync {
    /// Companies registered inside the window, ascending by `created_at`.
    /// An empty window yields an empty list, never an error.
    async fn companies_registered_in(
        &self,
        window: ReportingWindow,
    ) -> Result<Vec<Company>, DomainError>;
}

/// Fixture query for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompanyQuery;

#[async_trait]
impl CompanyQuery for FixtureCompanyQuery {
    async fn companies_registered_in(
        &self,
        _window: ReportingWindow,
    ) -> Result<Vec<Company>, DomainError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_query_returns_empty() {
        let companies = FixtureCompanyQuery
            .companies_registered_in(ReportingWindow::default_trailing())
            .await
            .expect("fixture query succeeds");
        assert!(companies.is_empty());
    }
}
