//! Reqwest-backed remote company writer adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use crate::domain::ports::{CompanyWriter, CompanyWriterError};
use crate::domain::{Company, CompanyDraft};

use super::dto::{CompanyDto, CreateCompanyRequestDto};

/// Hard floor on the request timeout; configured values below this are
/// clamped rather than rejected.
const MIN_REQUEST_TIMEOUT: Duration = Duration::from_millis(500);

/// Remote writer performing a JSON POST against one configured endpoint.
pub struct HttpCompanyWriter {
    client: Client,
    endpoint: Url,
}

impl HttpCompanyWriter {
    /// Build the adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout.max(MIN_REQUEST_TIMEOUT))
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl CompanyWriter for HttpCompanyWriter {
    async fn create(&self, draft: &CompanyDraft) -> Result<Company, CompanyWriterError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&CreateCompanyRequestDto::from_draft(draft))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        decode_company(body.as_ref())
    }
}

fn decode_company(body: &[u8]) -> Result<Company, CompanyWriterError> {
    let decoded: CompanyDto = serde_json::from_slice(body).map_err(|error| {
        CompanyWriterError::decode(format!("invalid company payload: {error}"))
    })?;
    decoded.into_domain().map_err(CompanyWriterError::decode)
}

fn map_transport_error(error: reqwest::Error) -> CompanyWriterError {
    if error.is_timeout() {
        CompanyWriterError::timeout(error.to_string())
    } else {
        CompanyWriterError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CompanyWriterError {
    let message = remote_message(body)
        .map_or_else(
            || format!("status {}", status.as_u16()),
            |remote| format!("status {}: {remote}", status.as_u16()),
        );

    if status.is_client_error() {
        CompanyWriterError::invalid_input(message)
    } else if status.is_server_error() {
        CompanyWriterError::upstream(message)
    } else {
        CompanyWriterError::protocol(message)
    }
}

/// Pull the remote's own message out of an error body, when present.
///
/// The delegate answers errors as JSON with a `message` (or `error`)
/// field; anything else falls back to a compact body preview.
fn remote_message(body: &[u8]) -> Option<String> {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                return Some(text.to_owned());
            }
        }
    }

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.is_empty() {
        return None;
    }
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        Some(format!("{preview}..."))
    } else {
        Some(preview)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use rstest::rstest;

    use super::*;
    use crate::domain::CompanyType;

    #[rstest]
    #[case::bad_request(StatusCode::BAD_REQUEST, "InvalidInput")]
    #[case::unprocessable(StatusCode::UNPROCESSABLE_ENTITY, "InvalidInput")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Upstream")]
    #[case::bad_gateway(StatusCode::BAD_GATEWAY, "Upstream")]
    #[case::redirect(StatusCode::MOVED_PERMANENTLY, "Protocol")]
    fn maps_http_statuses_to_expected_writer_errors(
        #[case] status: StatusCode,
        #[case] expected: &str,
    ) {
        let error = map_status_error(status, b"{\"message\":\"nope\"}");
        let matches = match expected {
            "InvalidInput" => matches!(error, CompanyWriterError::InvalidInput { .. }),
            "Upstream" => matches!(error, CompanyWriterError::Upstream { .. }),
            "Protocol" => matches!(error, CompanyWriterError::Protocol { .. }),
            other => panic!("unsupported expectation: {other}"),
        };
        assert!(matches, "{status} should map to {expected}, got {error}");
    }

    #[test]
    fn forwards_the_remote_message_on_client_errors() {
        let error = map_status_error(
            StatusCode::BAD_REQUEST,
            b"{\"message\":\"type => Debe ser PYME o CORP\"}",
        );

        assert!(error.to_string().contains("Debe ser PYME o CORP"));
    }

    #[test]
    fn falls_back_to_body_preview_for_non_json_errors() {
        let error = map_status_error(StatusCode::INTERNAL_SERVER_ERROR, b"<html>  boom  </html>");
        assert!(error.to_string().contains("<html> boom </html>"));
    }

    #[test]
    fn empty_error_body_reports_status_only() {
        let error = map_status_error(StatusCode::SERVICE_UNAVAILABLE, b"");
        assert!(error.to_string().contains("status 503"));
    }

    #[test]
    fn decodes_successful_company_payload() {
        let body = br#"{
            "id": "c10a9388-27f7-4fa6-9758-30efd1b1f22c",
            "name": "Corpo SRL",
            "type": "PYME",
            "createdAt": "2026-08-01T10:00:00Z"
        }"#;

        let company = decode_company(body).expect("payload decodes");
        assert_eq!(company.company_type(), CompanyType::Pyme);
    }

    #[test]
    fn absent_body_maps_to_decode_error() {
        let error = decode_company(b"").expect_err("empty body fails");
        assert!(matches!(error, CompanyWriterError::Decode { .. }));
    }

    #[test]
    fn timeout_floor_clamps_small_configured_values() {
        let writer = HttpCompanyWriter::new(
            Url::parse("https://writer.example/companies").expect("valid url"),
            Duration::from_millis(10),
        );
        // Construction succeeds; the clamp is internal to the client, so
        // this guards the floor constant itself.
        assert!(writer.is_ok());
        assert_eq!(MIN_REQUEST_TIMEOUT, Duration::from_millis(500));
    }
}
