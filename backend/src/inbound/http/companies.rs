//! Company API handlers.
//!
//! ```text
//! POST /api/v1/companies/register
//! GET  /api/v1/companies/registered
//! ```

use actix_web::{get, post, web, HttpResponse};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Company, CompanyDraft, DomainError, ReportingWindow};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_company_name, parse_company_type, parse_optional_rfc3339_timestamp, FieldName,
};
use crate::inbound::http::ApiResult;

/// Request payload for registering a company.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCompanyRequestBody {
    #[schema(example = "Corpo SRL")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "PYME")]
    pub company_type: String,
    #[schema(format = "date-time", example = "2026-08-01T19:58:14.342Z")]
    pub created_at: Option<String>,
}

/// Company representation returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub company_type: String,
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Company> for CompanyBody {
    fn from(company: Company) -> Self {
        Self {
            id: company.id().to_string(),
            name: company.name().as_str().to_owned(),
            company_type: company.company_type().as_str().to_owned(),
            created_at: format_timestamp(company.created_at()),
        }
    }
}

/// Inclusive window echoed back by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WindowBody {
    #[schema(format = "date-time")]
    pub since: String,
    #[schema(format = "date-time")]
    pub until: String,
}

impl From<ReportingWindow> for WindowBody {
    fn from(window: ReportingWindow) -> Self {
        Self {
            since: format_timestamp(window.since()),
            until: format_timestamp(window.until()),
        }
    }
}

/// Response payload for company list endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompaniesInWindowResponseBody {
    pub window: WindowBody,
    pub companies: Vec<CompanyBody>,
}

pub(crate) fn format_timestamp(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_register_body(body: RegisterCompanyRequestBody) -> Result<CompanyDraft, DomainError> {
    Ok(CompanyDraft {
        name: parse_company_name(body.name, FieldName::new("name"))?,
        company_type: parse_company_type(&body.company_type, FieldName::new("type"))?,
        created_at: parse_optional_rfc3339_timestamp(body.created_at, FieldName::new("createdAt"))?,
    })
}

/// Register a company.
#[utoipa::path(
    post,
    path = "/api/v1/companies/register",
    request_body = RegisterCompanyRequestBody,
    responses(
        (status = 201, description = "Company registered", body = CompanyBody),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 502, description = "Remote write delegate unavailable", body = DomainError),
        (status = 500, description = "Internal server error", body = DomainError)
    ),
    tags = ["companies"],
    operation_id = "registerCompany"
)]
#[post("/companies/register")]
pub async fn register_company(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterCompanyRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = parse_register_body(payload.into_inner())?;
    let company = state.companies.register_company(draft).await?;
    Ok(HttpResponse::Created().json(CompanyBody::from(company)))
}

/// Companies registered during the trailing 30-day window.
#[utoipa::path(
    get,
    path = "/api/v1/companies/registered",
    responses(
        (status = 200, description = "Companies in the window", body = CompaniesInWindowResponseBody),
        (status = 500, description = "Internal server error", body = DomainError)
    ),
    tags = ["companies"],
    operation_id = "listRegisteredCompanies"
)]
#[get("/companies/registered")]
pub async fn list_registered_companies(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CompaniesInWindowResponseBody>> {
    let window = ReportingWindow::default_trailing();
    let companies = state.companies_query.companies_registered_in(window).await?;

    Ok(web::Json(CompaniesInWindowResponseBody {
        window: WindowBody::from(window),
        companies: companies.into_iter().map(CompanyBody::from).collect(),
    }))
}
