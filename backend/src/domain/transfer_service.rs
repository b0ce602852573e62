//! Transfer application service.
//!
//! Implements the transfer driving ports over the transfer and company
//! repository ports. The existence guard runs here, once, before the
//! insert; reads deliberately skip it (an unknown filter id just matches
//! nothing).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::company_service::map_company_repository_error;
use crate::domain::ports::{
    CompanyRepository, TransferCommand, TransferQuery, TransferRepository,
    TransferRepositoryError,
};
use crate::domain::{Company, DomainError, NewTransfer, ReportingWindow, Transfer, TransferDraft};

/// Message returned when the referenced company does not exist.
///
/// `companyId` names the offending request field, as in the original API.
const COMPANY_NOT_FOUND: &str = "the company (companyId) does not exist";

fn map_transfer_repository_error(error: TransferRepositoryError) -> DomainError {
    match error {
        TransferRepositoryError::Connection { message }
        | TransferRepositoryError::Query { message } => {
            DomainError::internal(format!("transfer repository error: {message}"))
        }
    }
}

/// Transfer use cases: guarded creation and windowed reads.
#[derive(Clone)]
pub struct TransferService<T: ?Sized, C: ?Sized> {
    transfers: Arc<T>,
    companies: Arc<C>,
}

impl<T: ?Sized, C: ?Sized> TransferService<T, C> {
    /// Create the service over the transfer and company repositories.
    pub fn new(transfers: Arc<T>, companies: Arc<C>) -> Self {
        Self {
            transfers,
            companies,
        }
    }
}

#[async_trait]
impl<T, C> TransferCommand for TransferService<T, C>
where
    T: TransferRepository + ?Sized,
    C: CompanyRepository + ?Sized,
{
    async fn create_transfer(&self, draft: TransferDraft) -> Result<Transfer, DomainError> {
        let exists = self
            .companies
            .exists_by_id(&draft.company_id)
            .await
            .map_err(map_company_repository_error)?;
        if !exists {
            return Err(DomainError::not_found(COMPANY_NOT_FOUND));
        }

        let resolved = NewTransfer::from_draft(draft, Utc::now());
        let transfer = self
            .transfers
            .create(&resolved)
            .await
            .map_err(map_transfer_repository_error)?;

        tracing::info!(
            transfer_id = %transfer.id(),
            company_id = %transfer.company_id(),
            "transfer created"
        );
        Ok(transfer)
    }
}

#[async_trait]
impl<T, C> TransferQuery for TransferService<T, C>
where
    T: TransferRepository + ?Sized,
    C: CompanyRepository + ?Sized,
{
    async fn transfers_in(
        &self,
        window: ReportingWindow,
        company_id: Option<Uuid>,
    ) -> Result<Vec<Transfer>, DomainError> {
        self.transfers
            .find_between(&window, company_id)
            .await
            .map_err(map_transfer_repository_error)
    }

    async fn companies_with_transfers_in(
        &self,
        window: ReportingWindow,
    ) -> Result<Vec<Company>, DomainError> {
        self.transfers
            .find_companies_with_transfers_between(&window)
            .await
            .map_err(map_transfer_repository_error)
    }
}

#[cfg(test)]
#[path = "transfer_service_tests.rs"]
mod tests;
