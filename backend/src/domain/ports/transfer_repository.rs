//! Port abstraction for transfer persistence adapters and their errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Company, NewTransfer, ReportingWindow, Transfer};

use super::define_port_error;

define_port_error! {
    /// Errors raised by transfer repository adapters.
    pub enum TransferRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "transfer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "transfer repository query failed: {message}",
    }
}

/// Port for transfer writes and windowed reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransferRepository: Send + Sync {
    /// Persist a transfer, generating its identifier. The caller has
    /// already resolved `occurred_at` and verified the owning company.
    async fn create(&self, transfer: &NewTransfer) -> Result<Transfer, TransferRepositoryError>;

    /// Transfers with `occurred_at` inside the window, both bounds
    /// included, ascending by `occurred_at`; optionally narrowed to one
    /// company. An unknown company id matches nothing.
    async fn find_between(
        &self,
        window: &ReportingWindow,
        company_id: Option<Uuid>,
    ) -> Result<Vec<Transfer>, TransferRepositoryError>;

    /// Distinct companies owning at least one transfer inside the window,
    /// ascending by company `created_at`.
    async fn find_companies_with_transfers_between(
        &self,
        window: &ReportingWindow,
    ) -> Result<Vec<Company>, TransferRepositoryError>;
}

/// Fixture implementation for wiring paths that never touch persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTransferRepository;

#[async_trait]
impl TransferRepository for FixtureTransferRepository {
    async fn create(&self, transfer: &NewTransfer) -> Result<Transfer, TransferRepositoryError> {
        Ok(Transfer::new(
            Uuid::new_v4(),
            transfer.company_id,
            transfer.amount,
            transfer.occurred_at,
        ))
    }

    async fn find_between(
        &self,
        _window: &ReportingWindow,
        _company_id: Option<Uuid>,
    ) -> Result<Vec<Transfer>, TransferRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_companies_with_transfers_between(
        &self,
        _window: &ReportingWindow,
    ) -> Result<Vec<Company>, TransferRepositoryError> {
        Ok(Vec::new())
    }
}
