//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the company and transfer endpoints, the health probes,
//! and the request/response schemas. Swagger UI serves the document at
//! `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{DomainError, ErrorCode};
use crate::inbound::http::companies::{
    CompaniesInWindowResponseBody, CompanyBody, RegisterCompanyRequestBody, WindowBody,
};
use crate::inbound::http::transfers::{
    CreateTransferRequestBody, FiltersBody, TransferBody, TransfersInWindowResponseBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Company transfers API",
        description = "CRUD backend for companies and the transfers between them, \
                       filtered by a trailing 30-day window."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::companies::register_company,
        crate::inbound::http::companies::list_registered_companies,
        crate::inbound::http::transfers::create_transfer,
        crate::inbound::http::transfers::list_transfers,
        crate::inbound::http::transfers::list_companies_with_transfers,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterCompanyRequestBody,
        CompanyBody,
        WindowBody,
        CompaniesInWindowResponseBody,
        CreateTransferRequestBody,
        TransferBody,
        FiltersBody,
        TransfersInWindowResponseBody,
        DomainError,
        ErrorCode,
    )),
    tags(
        (name = "companies", description = "Register and list companies"),
        (name = "transfers", description = "Create and list transfers"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
