//! Shared validation helpers for inbound HTTP adapters.
//!
//! All boundary validation happens here, before any service call: UUID
//! format, RFC 3339 timestamps, enum membership, and the non-empty name
//! rule. Failures carry a `{field, code}` detail payload so clients can
//! point at the offending input.

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::domain::{CompanyName, CompanyType, DomainError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    EmptyName,
    InvalidType,
    InvalidUuid,
    InvalidTimestamp,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::InvalidType => "invalid_type",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidTimestamp => "invalid_timestamp",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn validation_error(
    field: FieldName,
    message: String,
    code: ErrorCode,
    value: Option<&str>,
) -> DomainError {
    let mut details = json!({
        "field": field.as_str(),
        "code": code.as_str(),
    });
    if let (Some(value), Some(map)) = (value, details.as_object_mut()) {
        map.insert("value".to_owned(), json!(value));
    }
    DomainError::invalid_request(message).with_details(details)
}

/// Parse a UUID-formatted identifier field.
pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|_| {
        validation_error(
            field,
            format!("{} must be a valid UUID", field.as_str()),
            ErrorCode::InvalidUuid,
            Some(value),
        )
    })
}

/// Parse an optional RFC 3339 timestamp field.
pub(crate) fn parse_optional_rfc3339_timestamp(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<DateTime<Utc>>, DomainError> {
    value
        .map(|raw| {
            DateTime::parse_from_rfc3339(&raw)
                .map(|timestamp| timestamp.with_timezone(&Utc))
                .map_err(|_| {
                    validation_error(
                        field,
                        format!("{} must be an RFC 3339 timestamp", field.as_str()),
                        ErrorCode::InvalidTimestamp,
                        Some(&raw),
                    )
                })
        })
        .transpose()
}

/// Validate the non-empty company name rule.
pub(crate) fn parse_company_name(value: String, field: FieldName) -> Result<CompanyName, DomainError> {
    CompanyName::new(value).map_err(|_| {
        validation_error(
            field,
            format!("{} must not be empty", field.as_str()),
            ErrorCode::EmptyName,
            None,
        )
    })
}

/// Validate enum membership for the company classification.
pub(crate) fn parse_company_type(value: &str, field: FieldName) -> Result<CompanyType, DomainError> {
    value.parse::<CompanyType>().map_err(|_| {
        validation_error(
            field,
            format!("{} must be PYME or CORP", field.as_str()),
            ErrorCode::InvalidType,
            Some(value),
        )
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for boundary validation.

    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    fn details(error: &DomainError) -> &serde_json::Map<String, Value> {
        error
            .details()
            .and_then(Value::as_object)
            .expect("validation errors carry details")
    }

    #[test]
    fn parse_uuid_accepts_canonical_form() {
        let id = parse_uuid(
            "c10a9388-27f7-4fa6-9758-30efd1b1f22c",
            FieldName::new("companyId"),
        )
        .expect("canonical uuid parses");
        assert_eq!(id.to_string(), "c10a9388-27f7-4fa6-9758-30efd1b1f22c");
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("c10a9388")]
    #[case("")]
    fn parse_uuid_rejects_malformed_values(#[case] raw: &str) {
        let error = parse_uuid(raw, FieldName::new("companyId")).expect_err("malformed uuid fails");

        let details = details(&error);
        assert_eq!(details["field"], "companyId");
        assert_eq!(details["code"], "invalid_uuid");
    }

    #[test]
    fn parse_timestamp_passes_none_through() {
        let parsed = parse_optional_rfc3339_timestamp(None, FieldName::new("occurredAt"))
            .expect("absent timestamp is fine");
        assert!(parsed.is_none());
    }

    #[test]
    fn parse_timestamp_accepts_rfc3339_with_millis() {
        let parsed = parse_optional_rfc3339_timestamp(
            Some("2026-08-01T19:58:14.342Z".to_owned()),
            FieldName::new("createdAt"),
        )
        .expect("rfc3339 parses")
        .expect("value present");
        assert_eq!(parsed.timezone(), Utc);
    }

    #[rstest]
    #[case("2026-08-01")]
    #[case("yesterday")]
    fn parse_timestamp_rejects_other_formats(#[case] raw: &str) {
        let error = parse_optional_rfc3339_timestamp(
            Some(raw.to_owned()),
            FieldName::new("occurredAt"),
        )
        .expect_err("non-rfc3339 fails");

        assert_eq!(details(&error)["code"], "invalid_timestamp");
    }

    #[test]
    fn parse_company_name_rejects_blank() {
        let error = parse_company_name("   ".to_owned(), FieldName::new("name"))
            .expect_err("blank name fails");

        assert_eq!(details(&error)["code"], "empty_name");
        assert_eq!(error.message(), "name must not be empty");
    }

    #[test]
    fn parse_company_type_rejects_unknown_value() {
        let error =
            parse_company_type("LLC", FieldName::new("type")).expect_err("unknown type fails");

        assert_eq!(details(&error)["code"], "invalid_type");
        assert_eq!(details(&error)["value"], "LLC");
    }
}
