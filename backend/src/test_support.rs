//! Test utilities for the backend crate.
//!
//! In-memory repository implementations with the full windowed semantics
//! of the ports: inclusive bounds, ascending ordering, the optional
//! company filter, and the distinct-owner query. Shared by unit tests in
//! `src/` and, through the `test-support` feature, by the integration
//! tests in `tests/`.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::ports::{
    CompanyRepository, CompanyRepositoryError, TransferRepository, TransferRepositoryError,
};
use crate::domain::{Company, CompanyDraft, NewTransfer, ReportingWindow, Transfer};

/// In-memory company store implementing the repository port.
#[derive(Default)]
pub struct InMemoryCompanyRepository {
    rows: Mutex<Vec<Company>>,
}

impl InMemoryCompanyRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> MutexGuard<'_, Vec<Company>> {
        self.rows.lock().expect("company store lock poisoned")
    }

    /// Number of stored companies.
    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Copy of every stored company.
    pub fn snapshot(&self) -> Vec<Company> {
        self.rows().clone()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, draft: &CompanyDraft) -> Result<Company, CompanyRepositoryError> {
        let company = Company::new(
            Uuid::new_v4(),
            draft.name.clone(),
            draft.company_type,
            draft.created_at.unwrap_or_else(Utc::now),
        );
        self.rows().push(company.clone());
        Ok(company)
    }

    async fn find_registered_between(
        &self,
        window: &ReportingWindow,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut matching: Vec<Company> = self
            .rows()
            .iter()
            .filter(|company| window.contains(company.created_at()))
            .cloned()
            .collect();
        matching.sort_by_key(Company::created_at);
        Ok(matching)
    }

    async fn exists_by_id(&self, id: &Uuid) -> Result<bool, CompanyRepositoryError> {
        Ok(self.rows().iter().any(|company| company.id() == *id))
    }
}

/// In-memory transfer store implementing the repository port.
///
/// Holds a handle to the company store so the distinct-owner query can
/// materialise owning companies, like the SQL join does.
pub struct InMemoryTransferRepository {
    companies: Arc<InMemoryCompanyRepository>,
    rows: Mutex<Vec<Transfer>>,
}

impl InMemoryTransferRepository {
    /// Empty store resolving owners against the given company store.
    pub fn new(companies: Arc<InMemoryCompanyRepository>) -> Self {
        Self {
            companies,
            rows: Mutex::new(Vec::new()),
        }
    }

    fn rows(&self) -> MutexGuard<'_, Vec<Transfer>> {
        self.rows.lock().expect("transfer store lock poisoned")
    }

    /// Number of stored transfers.
    pub fn row_count(&self) -> usize {
        self.rows().len()
    }
}

#[async_trait]
impl TransferRepository for InMemoryTransferRepository {
    async fn create(&self, transfer: &NewTransfer) -> Result<Transfer, TransferRepositoryError> {
        let transfer = Transfer::new(
            Uuid::new_v4(),
            transfer.company_id,
            transfer.amount,
            transfer.occurred_at,
        );
        self.rows().push(transfer.clone());
        Ok(transfer)
    }

    async fn find_between(
        &self,
        window: &ReportingWindow,
        company_id: Option<Uuid>,
    ) -> Result<Vec<Transfer>, TransferRepositoryError> {
        let mut matching: Vec<Transfer> = self
            .rows()
            .iter()
            .filter(|transfer| window.contains(transfer.occurred_at()))
            .filter(|transfer| company_id.is_none_or(|id| transfer.company_id() == id))
            .cloned()
            .collect();
        matching.sort_by_key(Transfer::occurred_at);
        Ok(matching)
    }

    async fn find_companies_with_transfers_between(
        &self,
        window: &ReportingWindow,
    ) -> Result<Vec<Company>, TransferRepositoryError> {
        let owner_ids: Vec<Uuid> = self
            .rows()
            .iter()
            .filter(|transfer| window.contains(transfer.occurred_at()))
            .map(Transfer::company_id)
            .collect();

        let mut owners: Vec<Company> = self
            .companies
            .snapshot()
            .into_iter()
            .filter(|company| owner_ids.contains(&company.id()))
            .collect();
        owners.sort_by_key(Company::created_at);
        Ok(owners)
    }
}

#[cfg(test)]
mod tests {
    //! Windowed-semantics coverage against the in-memory stores.

    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{CompanyName, CompanyType};

    async fn register(
        repo: &InMemoryCompanyRepository,
        name: &str,
        created_at: chrono::DateTime<Utc>,
    ) -> Company {
        repo.create(&CompanyDraft {
            name: CompanyName::new(name).expect("valid name"),
            company_type: CompanyType::Pyme,
            created_at: Some(created_at),
        })
        .await
        .expect("create succeeds")
    }

    async fn record(
        repo: &InMemoryTransferRepository,
        company_id: Uuid,
        occurred_at: chrono::DateTime<Utc>,
    ) -> Transfer {
        repo.create(&NewTransfer {
            company_id,
            amount: Decimal::new(100, 0),
            occurred_at,
        })
        .await
        .expect("create succeeds")
    }

    #[tokio::test]
    async fn registered_window_excludes_old_companies_and_orders_ascending() {
        let now = Utc::now();
        let repo = InMemoryCompanyRepository::new();
        register(&repo, "Old", now - Duration::days(40)).await;
        register(&repo, "A", now - Duration::days(10)).await;
        register(&repo, "B", now - Duration::days(5)).await;

        let window = ReportingWindow::new(now - Duration::days(30), now);
        let listed = repo
            .find_registered_between(&window)
            .await
            .expect("query succeeds");

        let names: Vec<&str> = listed.iter().map(|c| c.name().as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn registered_window_includes_both_bounds() {
        let now = Utc::now();
        let since = now - Duration::days(30);
        let repo = InMemoryCompanyRepository::new();
        register(&repo, "AtSince", since).await;
        register(&repo, "AtUntil", now).await;

        let listed = repo
            .find_registered_between(&ReportingWindow::new(since, now))
            .await
            .expect("query succeeds");

        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn transfer_window_filters_and_orders_by_occurred_at() {
        let now = Utc::now();
        let companies = Arc::new(InMemoryCompanyRepository::new());
        let a = register(&companies, "A", now - Duration::days(20)).await;
        let b = register(&companies, "B", now - Duration::days(10)).await;
        let repo = InMemoryTransferRepository::new(companies);

        record(&repo, a.id(), now - Duration::days(40)).await;
        let second = record(&repo, a.id(), now - Duration::days(2)).await;
        let first = record(&repo, b.id(), now - Duration::days(8)).await;

        let window = ReportingWindow::new(now - Duration::days(30), now);
        let listed = repo
            .find_between(&window, None)
            .await
            .expect("query succeeds");

        let ids: Vec<Uuid> = listed.iter().map(Transfer::id).collect();
        assert_eq!(ids, vec![first.id(), second.id()]);
    }

    #[tokio::test]
    async fn transfer_filter_narrows_to_one_company() {
        let now = Utc::now();
        let companies = Arc::new(InMemoryCompanyRepository::new());
        let a = register(&companies, "A", now - Duration::days(20)).await;
        let b = register(&companies, "B", now - Duration::days(10)).await;
        let repo = InMemoryTransferRepository::new(companies);

        record(&repo, a.id(), now - Duration::days(3)).await;
        record(&repo, b.id(), now - Duration::days(2)).await;

        let window = ReportingWindow::new(now - Duration::days(30), now);
        let only_a = repo
            .find_between(&window, Some(a.id()))
            .await
            .expect("query succeeds");
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a[0].company_id(), a.id());

        let unknown = repo
            .find_between(&window, Some(Uuid::nil()))
            .await
            .expect("unknown id yields empty");
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn owner_query_deduplicates_and_orders_by_registration() {
        let now = Utc::now();
        let companies = Arc::new(InMemoryCompanyRepository::new());
        // B registered before A so ordering by created_at is observable.
        let b = register(&companies, "B", now - Duration::days(25)).await;
        let a = register(&companies, "A", now - Duration::days(20)).await;
        register(&companies, "Silent", now - Duration::days(15)).await;
        let repo = InMemoryTransferRepository::new(companies);

        // A has one transfer inside the window and one outside it.
        record(&repo, a.id(), now - Duration::days(5)).await;
        record(&repo, a.id(), now - Duration::days(40)).await;
        record(&repo, a.id(), now - Duration::days(6)).await;
        record(&repo, b.id(), now - Duration::days(10)).await;

        let window = ReportingWindow::new(now - Duration::days(30), now);
        let owners = repo
            .find_companies_with_transfers_between(&window)
            .await
            .expect("query succeeds");

        let names: Vec<&str> = owners.iter().map(|c| c.name().as_str()).collect();
        assert_eq!(names, vec!["B", "A"], "deduplicated and ordered by created_at");
    }
}
