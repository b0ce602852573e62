//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered companies.
    ///
    /// Rows are insert-only: companies are immutable after registration
    /// and never deleted.
    companies (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Registered company name (non-empty).
        name -> Varchar,
        /// Classification: `PYME` or `CORP`.
        company_type -> Varchar,
        /// Registration instant.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Transfers owned by companies.
    ///
    /// `company_id` references `companies.id`; the existence guard runs
    /// before insertion, and rows are insert-only.
    transfers (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning company.
        company_id -> Uuid,
        /// Exact fixed-point amount.
        amount -> Numeric,
        /// Instant the transfer occurred.
        occurred_at -> Timestamptz,
    }
}

diesel::joinable!(transfers -> companies (company_id));
diesel::allow_tables_to_appear_in_same_query!(companies, transfers);
