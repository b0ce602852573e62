//! PostgreSQL-backed `TransferRepository` implementation using Diesel ORM.
//!
//! Window filters translate to SQL `BETWEEN`, which is inclusive at both
//! ends. The distinct-owner query joins transfers to companies and
//! deduplicates in SQL.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{TransferRepository, TransferRepositoryError};
use crate::domain::{Company, NewTransfer, ReportingWindow, Transfer};

use super::diesel_company_repository::row_to_company;
use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CompanyRow, NewTransferRow, TransferRow};
use super::pool::{DbPool, PoolError};
use super::schema::{companies, transfers};

/// Diesel-backed implementation of the transfer repository port.
#[derive(Clone)]
pub struct DieselTransferRepository {
    pool: DbPool,
}

impl DieselTransferRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> TransferRepositoryError {
    map_pool_error(error, TransferRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> TransferRepositoryError {
    map_diesel_error(
        error,
        TransferRepositoryError::query,
        TransferRepositoryError::connection,
    )
}

fn row_to_transfer(row: TransferRow) -> Transfer {
    Transfer::new(row.id, row.company_id, row.amount, row.occurred_at)
}

#[async_trait]
impl TransferRepository for DieselTransferRepository {
    async fn create(&self, transfer: &NewTransfer) -> Result<Transfer, TransferRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let new_row = NewTransferRow {
            id: Uuid::new_v4(),
            company_id: transfer.company_id,
            amount: transfer.amount,
            occurred_at: transfer.occurred_at,
        };

        let created: TransferRow = diesel::insert_into(transfers::table)
            .values(&new_row)
            .returning(TransferRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel)?;

        Ok(row_to_transfer(created))
    }

    async fn find_between(
        &self,
        window: &ReportingWindow,
        company_id: Option<Uuid>,
    ) -> Result<Vec<Transfer>, TransferRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let mut query = transfers::table
            .filter(transfers::occurred_at.between(window.since(), window.until()))
            .order(transfers::occurred_at.asc())
            .select(TransferRow::as_select())
            .into_boxed();
        if let Some(company_id) = company_id {
            query = query.filter(transfers::company_id.eq(company_id));
        }

        let rows: Vec<TransferRow> = query.load(&mut conn).await.map_err(map_diesel)?;
        Ok(rows.into_iter().map(row_to_transfer).collect())
    }

    async fn find_companies_with_transfers_between(
        &self,
        window: &ReportingWindow,
    ) -> Result<Vec<Company>, TransferRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let rows: Vec<CompanyRow> = transfers::table
            .inner_join(companies::table)
            .filter(transfers::occurred_at.between(window.since(), window.until()))
            .select(CompanyRow::as_select())
            .distinct()
            .order(companies::created_at.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        rows.into_iter()
            .map(|row| {
                row_to_company(row)
                    .map_err(|err| TransferRepositoryError::query(err.to_string()))
            })
            .collect()
    }
}
