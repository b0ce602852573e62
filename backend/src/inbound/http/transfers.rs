//! Transfer API handlers.
//!
//! ```text
//! POST /api/v1/transfers
//! GET  /api/v1/transfers/records?companyId=...
//! GET  /api/v1/transfers/companies
//! ```

use actix_web::{get, post, web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, ReportingWindow, Transfer, TransferDraft};
use crate::inbound::http::companies::{
    format_timestamp, CompaniesInWindowResponseBody, CompanyBody, WindowBody,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_optional_rfc3339_timestamp, parse_uuid, FieldName,
};
use crate::inbound::http::ApiResult;

/// Request payload for creating a transfer.
///
/// `amount` crosses the wire as a JSON number; it is held as an exact
/// decimal from the moment it is parsed.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferRequestBody {
    #[schema(format = "uuid", example = "c10a9388-27f7-4fa6-9758-30efd1b1f22c")]
    pub company_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 12345.67)]
    pub amount: Decimal,
    #[schema(format = "date-time", example = "2026-08-01T19:58:14.342Z")]
    pub occurred_at: Option<String>,
}

/// Transfer representation returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub company_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub amount: Decimal,
    #[schema(format = "date-time")]
    pub occurred_at: String,
}

impl From<Transfer> for TransferBody {
    fn from(transfer: Transfer) -> Self {
        Self {
            id: transfer.id().to_string(),
            company_id: transfer.company_id().to_string(),
            amount: transfer.amount(),
            occurred_at: format_timestamp(transfer.occurred_at()),
        }
    }
}

/// Query parameters accepted by the transfer listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransfersQuery {
    pub company_id: Option<String>,
}

/// Filters echoed back by the transfer listing. `companyId` serialises as
/// `null` when no filter was applied.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltersBody {
    pub company_id: Option<String>,
}

/// Response payload for the transfer listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransfersInWindowResponseBody {
    pub window: WindowBody,
    pub filters: FiltersBody,
    pub transfers: Vec<TransferBody>,
}

/// Create a transfer for an existing company.
#[utoipa::path(
    post,
    path = "/api/v1/transfers",
    request_body = CreateTransferRequestBody,
    responses(
        (status = 201, description = "Transfer created", body = TransferBody),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 404, description = "Referenced company does not exist", body = DomainError),
        (status = 500, description = "Internal server error", body = DomainError)
    ),
    tags = ["transfers"],
    operation_id = "createTransfer"
)]
#[post("/transfers")]
pub async fn create_transfer(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTransferRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let draft = TransferDraft {
        company_id: parse_uuid(&body.company_id, FieldName::new("companyId"))?,
        amount: body.amount,
        occurred_at: parse_optional_rfc3339_timestamp(
            body.occurred_at,
            FieldName::new("occurredAt"),
        )?,
    };

    let transfer = state.transfers.create_transfer(draft).await?;
    Ok(HttpResponse::Created().json(TransferBody::from(transfer)))
}

/// Transfers during the trailing 30-day window, optionally filtered by
/// company.
#[utoipa::path(
    get,
    path = "/api/v1/transfers/records",
    params(
        ("companyId" = Option<String>, Query, description = "Narrow the listing to one company")
    ),
    responses(
        (status = 200, description = "Transfers in the window", body = TransfersInWindowResponseBody),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 500, description = "Internal server error", body = DomainError)
    ),
    tags = ["transfers"],
    operation_id = "listTransfers"
)]
#[get("/transfers/records")]
pub async fn list_transfers(
    state: web::Data<HttpState>,
    query: web::Query<ListTransfersQuery>,
) -> ApiResult<web::Json<TransfersInWindowResponseBody>> {
    let company_id = query
        .into_inner()
        .company_id
        .map(|raw| parse_uuid(&raw, FieldName::new("companyId")))
        .transpose()?;

    let window = ReportingWindow::default_trailing();
    let transfers = state.transfers_query.transfers_in(window, company_id).await?;

    Ok(web::Json(TransfersInWindowResponseBody {
        window: WindowBody::from(window),
        filters: FiltersBody {
            company_id: company_id.map(|id| id.to_string()),
        },
        transfers: transfers.into_iter().map(TransferBody::from).collect(),
    }))
}

/// Companies with at least one transfer during the trailing 30-day window.
#[utoipa::path(
    get,
    path = "/api/v1/transfers/companies",
    responses(
        (status = 200, description = "Companies with transfers in the window", body = CompaniesInWindowResponseBody),
        (status = 500, description = "Internal server error", body = DomainError)
    ),
    tags = ["transfers"],
    operation_id = "listCompaniesWithTransfers"
)]
#[get("/transfers/companies")]
pub async fn list_companies_with_transfers(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CompaniesInWindowResponseBody>> {
    let window = ReportingWindow::default_trailing();
    let companies = state
        .transfers_query
        .companies_with_transfers_in(window)
        .await?;

    Ok(web::Json(CompaniesInWindowResponseBody {
        window: WindowBody::from(window),
        companies: companies.into_iter().map(CompanyBody::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test as actix_test, web, App};
    use chrono::Utc;
    use rstest::rstest;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use super::*;
    use crate::domain::ports::{
        FixtureCompanyCommand, FixtureCompanyQuery, FixtureTransferQuery, MockTransferCommand,
        MockTransferQuery,
    };

    fn state_with_command(command: MockTransferCommand) -> HttpState {
        HttpState::new(
            Arc::new(FixtureCompanyCommand),
            Arc::new(FixtureCompanyQuery),
            Arc::new(command),
            Arc::new(FixtureTransferQuery),
        )
    }

    fn state_with_query(query: MockTransferQuery) -> HttpState {
        HttpState::new(
            Arc::new(FixtureCompanyCommand),
            Arc::new(FixtureCompanyQuery),
            Arc::new(MockTransferCommand::new()),
            Arc::new(query),
        )
    }

    async fn call(
        state: HttpState,
        request: actix_test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/api/v1")
                    .service(create_transfer)
                    .service(list_transfers)
                    .service(list_companies_with_transfers),
            ),
        )
        .await;
        actix_test::call_service(&app, request.to_request()).await
    }

    #[actix_web::test]
    async fn create_returns_transfer_with_numeric_amount() {
        let mut command = MockTransferCommand::new();
        command
            .expect_create_transfer()
            .times(1)
            .return_once(|draft| {
                Ok(Transfer::new(
                    Uuid::new_v4(),
                    draft.company_id,
                    draft.amount,
                    draft.occurred_at.unwrap_or_else(Utc::now),
                ))
            });

        let company_id = Uuid::new_v4();
        let response = call(
            state_with_command(command),
            actix_test::TestRequest::post().uri("/api/v1/transfers").set_json(json!({
                "companyId": company_id.to_string(),
                "amount": 12345.67,
            })),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["companyId"], company_id.to_string());
        assert!(body["amount"].is_number());
        assert_eq!(body["amount"].as_f64(), Some(12345.67));
    }

    #[actix_web::test]
    async fn create_rejects_malformed_company_id_before_the_service() {
        let mut command = MockTransferCommand::new();
        command.expect_create_transfer().times(0);

        let response = call(
            state_with_command(command),
            actix_test::TestRequest::post().uri("/api/v1/transfers").set_json(json!({
                "companyId": "not-a-uuid",
                "amount": 10.0,
            })),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["field"], "companyId");
        assert_eq!(body["details"]["code"], "invalid_uuid");
    }

    #[actix_web::test]
    async fn create_maps_unknown_company_to_not_found() {
        let mut command = MockTransferCommand::new();
        command
            .expect_create_transfer()
            .times(1)
            .return_once(|_| {
                Err(DomainError::not_found(
                    "the company (companyId) does not exist",
                ))
            });

        let response = call(
            state_with_command(command),
            actix_test::TestRequest::post().uri("/api/v1/transfers").set_json(json!({
                "companyId": "00000000-0000-0000-0000-000000000000",
                "amount": 50.0,
            })),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["message"], "the company (companyId) does not exist");
    }

    #[actix_web::test]
    async fn listing_without_filter_echoes_null_company_id() {
        let mut query = MockTransferQuery::new();
        query
            .expect_transfers_in()
            .withf(|_, filter| filter.is_none())
            .times(1)
            .return_once(|_, _| Ok(Vec::new()));

        let response = call(
            state_with_query(query),
            actix_test::TestRequest::get().uri("/api/v1/transfers/records"),
        )
        .await;

        assert!(response.status().is_success());
        let body: Value = actix_test::read_body_json(response).await;
        assert!(body["filters"]["companyId"].is_null());
        assert_eq!(body["transfers"], json!([]));
    }

    #[actix_web::test]
    async fn listing_forwards_the_company_filter() {
        let company_id = Uuid::new_v4();
        let mut query = MockTransferQuery::new();
        query
            .expect_transfers_in()
            .withf(move |_, filter| filter == &Some(company_id))
            .times(1)
            .return_once(move |_, _| {
                Ok(vec![Transfer::new(
                    Uuid::new_v4(),
                    company_id,
                    rust_decimal::Decimal::new(9_99, 2),
                    Utc::now(),
                )])
            });

        let response = call(
            state_with_query(query),
            actix_test::TestRequest::get()
                .uri(&format!("/api/v1/transfers/records?companyId={company_id}")),
        )
        .await;

        assert!(response.status().is_success());
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["filters"]["companyId"], company_id.to_string());
        assert_eq!(body["transfers"][0]["companyId"], company_id.to_string());
    }

    #[rstest]
    #[actix_web::test]
    async fn listing_rejects_malformed_filter() {
        let mut query = MockTransferQuery::new();
        query.expect_transfers_in().times(0);

        let response = call(
            state_with_query(query),
            actix_test::TestRequest::get().uri("/api/v1/transfers/records?companyId=banana"),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn owner_listing_returns_window_and_companies() {
        let mut query = MockTransferQuery::new();
        query
            .expect_companies_with_transfers_in()
            .times(1)
            .return_once(|_| Ok(Vec::new()));

        let response = call(
            state_with_query(query),
            actix_test::TestRequest::get().uri("/api/v1/transfers/companies"),
        )
        .await;

        assert!(response.status().is_success());
        let body: Value = actix_test::read_body_json(response).await;
        assert!(body["window"]["since"].is_string());
        assert_eq!(body["companies"], json!([]));
    }
}
