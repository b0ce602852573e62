//! Transfer aggregate: a movement of money owned by a company.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Recorded transfer.
///
/// ## Invariants
/// - `company_id` referenced an existing company when the transfer was
///   created (the existence guard runs once, at creation time).
/// - `amount` is an exact fixed-point decimal; adapters must not round-trip
///   it through floating point.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    id: Uuid,
    company_id: Uuid,
    amount: Decimal,
    occurred_at: DateTime<Utc>,
}

impl Transfer {
    /// Assemble a transfer from already-validated parts.
    pub fn new(id: Uuid, company_id: Uuid, amount: Decimal, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id,
            company_id,
            amount,
            occurred_at,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Owning company.
    pub fn company_id(&self) -> Uuid {
        self.company_id
    }

    /// Transferred amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Instant the transfer occurred.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Input for creating a transfer, as received from the boundary.
///
/// `occurred_at` is optional; the transfer service defaults it to the
/// creation instant before the insert.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferDraft {
    pub company_id: Uuid,
    pub amount: Decimal,
    pub occurred_at: Option<DateTime<Utc>>,
}

/// Fully-resolved transfer handed to the repository for insertion.
///
/// Unlike [`TransferDraft`], every field is concrete: the service has
/// already applied the `occurred_at` default and run the existence guard.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransfer {
    pub company_id: Uuid,
    pub amount: Decimal,
    pub occurred_at: DateTime<Utc>,
}

impl NewTransfer {
    /// Resolve a draft, defaulting `occurred_at` to the given instant.
    pub fn from_draft(draft: TransferDraft, now: DateTime<Utc>) -> Self {
        Self {
            company_id: draft.company_id,
            amount: draft.amount,
            occurred_at: draft.occurred_at.unwrap_or(now),
        }
    }
}
