//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they depend
//! only on the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CompanyCommand, CompanyQuery, TransferCommand, TransferQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub companies: Arc<dyn CompanyCommand>,
    pub companies_query: Arc<dyn CompanyQuery>,
    pub transfers: Arc<dyn TransferCommand>,
    pub transfers_query: Arc<dyn TransferQuery>,
}

impl HttpState {
    /// Bundle the four driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{
    ///     FixtureCompanyCommand, FixtureCompanyQuery, FixtureTransferCommand,
    ///     FixtureTransferQuery,
    /// };
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureCompanyCommand),
    ///     Arc::new(FixtureCompanyQuery),
    ///     Arc::new(FixtureTransferCommand),
    ///     Arc::new(FixtureTransferQuery),
    /// );
    /// let _companies = state.companies.clone();
    /// ```
    pub fn new(
        companies: Arc<dyn CompanyCommand>,
        companies_query: Arc<dyn CompanyQuery>,
        transfers: Arc<dyn TransferCommand>,
        transfers_query: Arc<dyn TransferQuery>,
    ) -> Self {
        Self {
            companies,
            companies_query,
            transfers,
            transfers_query,
        }
    }
}
