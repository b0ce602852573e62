//! Driving port for transfer mutations.

use async_trait::async_trait;

use crate::domain::{DomainError, Transfer, TransferDraft};

/// Driving port for creating transfers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransferCommand: Send + Sync {
    /// Create a transfer for an existing company.
    ///
    /// Fails with a `NotFound` envelope when the referenced company does
    /// not exist; nothing is persisted in that case. `occurred_at`
    /// defaults to the creation instant when the draft omits it.
    async fn create_transfer(&self, draft: TransferDraft) -> Result<Transfer, DomainError>;
}

/// Fixture command for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTransferCommand;

#[async_trait]
impl TransferCommand for FixtureTransferCommand {
    async fn create_transfer(&self, draft: TransferDraft) -> Result<Transfer, DomainError> {
        Ok(Transfer::new(
            uuid::Uuid::new_v4(),
            draft.company_id,
            draft.amount,
            draft.occurred_at.unwrap_or_else(chrono::Utc::now),
        ))
    }
}
