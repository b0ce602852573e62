//! PostgreSQL-backed `CompanyRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{CompanyRepository, CompanyRepositoryError};
use crate::domain::{Company, CompanyDraft, CompanyName, CompanyType, ReportingWindow};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CompanyRow, NewCompanyRow};
use super::pool::{DbPool, PoolError};
use super::schema::companies;

/// Diesel-backed implementation of the company repository port.
#[derive(Clone)]
pub struct DieselCompanyRepository {
    pool: DbPool,
}

impl DieselCompanyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> CompanyRepositoryError {
    map_pool_error(error, CompanyRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> CompanyRepositoryError {
    map_diesel_error(
        error,
        CompanyRepositoryError::query,
        CompanyRepositoryError::connection,
    )
}

/// Convert a database row into a validated domain company.
pub(crate) fn row_to_company(row: CompanyRow) -> Result<Company, CompanyRepositoryError> {
    let CompanyRow {
        id,
        name,
        company_type,
        created_at,
    } = row;

    let name = CompanyName::new(name)
        .map_err(|err| CompanyRepositoryError::query(format!("decode company name: {err}")))?;
    let company_type = company_type
        .parse::<CompanyType>()
        .map_err(|err| CompanyRepositoryError::query(format!("decode company type: {err}")))?;

    Ok(Company::new(id, name, company_type, created_at))
}

#[async_trait]
impl CompanyRepository for DieselCompanyRepository {
    async fn create(&self, draft: &CompanyDraft) -> Result<Company, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let new_row = NewCompanyRow {
            id: Uuid::new_v4(),
            name: draft.name.as_str(),
            company_type: draft.company_type.as_str(),
            created_at: draft.created_at.unwrap_or_else(Utc::now),
        };

        let created: CompanyRow = diesel::insert_into(companies::table)
            .values(&new_row)
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel)?;

        row_to_company(created)
    }

    async fn find_registered_between(
        &self,
        window: &ReportingWindow,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let rows: Vec<CompanyRow> = companies::table
            .filter(companies::created_at.between(window.since(), window.until()))
            .order(companies::created_at.asc())
            .select(CompanyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        rows.into_iter().map(row_to_company).collect()
    }

    async fn exists_by_id(&self, id: &Uuid) -> Result<bool, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        diesel::select(diesel::dsl::exists(
            companies::table.filter(companies::id.eq(*id)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel)
    }
}
