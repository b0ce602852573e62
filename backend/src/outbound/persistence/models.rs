//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain. They exist solely to satisfy Diesel's type requirements for
//! queries and inserts.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::schema::{companies, transfers};

/// Row struct for reading from the companies table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub company_type: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for registering companies.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = companies)]
pub(crate) struct NewCompanyRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub company_type: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Row struct for reading from the transfers table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = transfers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TransferRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub amount: Decimal,
    pub occurred_at: DateTime<Utc>,
}

/// Insertable struct for recording transfers.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = transfers)]
pub(crate) struct NewTransferRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub amount: Decimal,
    pub occurred_at: DateTime<Utc>,
}
