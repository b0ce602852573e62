//! Server construction and adapter wiring.
//!
//! Adapter selection is a configuration-time decision made once here:
//! the company repository is either the Diesel adapter alone or the
//! hybrid (remote-write / local-read) composition, fixed for the process
//! lifetime.

mod config;

pub use config::{RemoteWriteSettings, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{
    CompanyRepository, FixtureCompanyRepository, FixtureTransferRepository, TransferRepository,
};
use crate::domain::{CompanyService, TransferService};
use crate::inbound::http::companies::{list_registered_companies, register_company};
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::transfers::{
    create_transfer, list_companies_with_transfers, list_transfers,
};
use crate::middleware::RequestId;
use crate::outbound::persistence::{DieselCompanyRepository, DieselTransferRepository};
use crate::outbound::remote_write::{HttpCompanyWriter, HybridCompanyRepository};

/// Choose the company repository implementation from configuration.
///
/// With the remote-write flag enabled and an endpoint configured, company
/// writes route through the remote delegate while reads stay on local
/// storage. Otherwise the Diesel adapter serves everything. Without a
/// database pool the fixture repository stands in, which only suits
/// smoke tests.
///
/// # Errors
/// Returns [`std::io::Error`] when the remote writer client cannot be
/// constructed.
fn build_company_repository(config: &ServerConfig) -> std::io::Result<Arc<dyn CompanyRepository>> {
    let Some(pool) = &config.db_pool else {
        return Ok(Arc::new(FixtureCompanyRepository));
    };
    let local = DieselCompanyRepository::new(pool.clone());

    match config.remote_write.endpoint() {
        Some(endpoint) => {
            let writer = HttpCompanyWriter::new(endpoint, config.remote_write.timeout())
                .map_err(|err| {
                    std::io::Error::other(format!("remote writer construction failed: {err}"))
                })?;
            info!("company writes route through the remote delegate");
            Ok(Arc::new(HybridCompanyRepository::new(writer, local)))
        }
        None => Ok(Arc::new(local)),
    }
}

/// Choose the transfer repository implementation from configuration.
fn build_transfer_repository(config: &ServerConfig) -> Arc<dyn TransferRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselTransferRepository::new(pool.clone())),
        None => Arc::new(FixtureTransferRepository),
    }
}

/// Wire the application services over the chosen repositories.
fn build_http_state(
    companies: Arc<dyn CompanyRepository>,
    transfers: Arc<dyn TransferRepository>,
) -> HttpState {
    let company_service = Arc::new(CompanyService::new(companies.clone()));
    let transfer_service = Arc::new(TransferService::new(transfers, companies));

    HttpState::new(
        company_service.clone(),
        company_service,
        transfer_service.clone(),
        transfer_service,
    )
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(register_company)
        .service(list_registered_companies)
        .service(create_transfer)
        .service(list_transfers)
        .service(list_companies_with_transfers);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(RequestId)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct the HTTP server from the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when adapter wiring or binding the
/// socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let companies = build_company_repository(&config)?;
    let transfers = build_transfer_repository(&config);
    let http_state = web::Data::new(build_http_state(companies, transfers));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
