//! Company aggregate: identity, validated name, and classification.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a registered company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub enum CompanyType {
    /// Small or medium-sized enterprise.
    #[serde(rename = "PYME")]
    Pyme,
    /// Large corporation.
    #[serde(rename = "CORP")]
    Corp,
}

impl CompanyType {
    /// Wire and storage representation of the classification.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pyme => "PYME",
            Self::Corp => "CORP",
        }
    }
}

impl std::fmt::Display for CompanyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyType {
    type Err = CompanyValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PYME" => Ok(Self::Pyme),
            "CORP" => Ok(Self::Corp),
            other => Err(CompanyValidationError::UnknownType {
                value: other.to_owned(),
            }),
        }
    }
}

/// Validation errors raised by company constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompanyValidationError {
    /// The company name is empty once trimmed.
    #[error("company name must not be empty")]
    EmptyName,
    /// The classification is not one of the supported values.
    #[error("company type must be PYME or CORP, got {value}")]
    UnknownType { value: String },
}

/// Non-empty company name.
///
/// ## Invariants
/// - The wrapped string is non-empty after trimming whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyName(String);

impl CompanyName {
    /// Validate and wrap a raw name.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyValidationError::EmptyName`] when the value is
    /// empty or whitespace only.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::CompanyName;
    ///
    /// let name = CompanyName::new("Corpo SRL").expect("valid name");
    /// assert_eq!(name.as_str(), "Corpo SRL");
    /// assert!(CompanyName::new("   ").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, CompanyValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CompanyValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    /// Borrow the inner name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consume the wrapper and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CompanyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered company.
///
/// Companies are immutable once registered and are never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    id: Uuid,
    name: CompanyName,
    company_type: CompanyType,
    created_at: DateTime<Utc>,
}

impl Company {
    /// Assemble a company from already-validated parts.
    pub fn new(
        id: Uuid,
        name: CompanyName,
        company_type: CompanyType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            company_type,
            created_at,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Registered name.
    pub fn name(&self) -> &CompanyName {
        &self.name
    }

    /// Classification.
    pub fn company_type(&self) -> CompanyType {
        self.company_type
    }

    /// Registration instant.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Input for registering a company.
///
/// `created_at` is optional; adapters default it to the persistence
/// instant when absent, so the value survives untouched through a remote
/// write delegate.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyDraft {
    pub name: CompanyName,
    pub company_type: CompanyType,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for company validation.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("PYME", CompanyType::Pyme)]
    #[case("CORP", CompanyType::Corp)]
    fn company_type_parses_supported_values(#[case] raw: &str, #[case] expected: CompanyType) {
        let parsed: CompanyType = raw.parse().expect("supported value parses");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.as_str(), raw);
    }

    #[rstest]
    #[case("pyme")]
    #[case("LLC")]
    #[case("")]
    fn company_type_rejects_unknown_values(#[case] raw: &str) {
        let error = raw.parse::<CompanyType>().expect_err("unknown value fails");
        assert!(matches!(error, CompanyValidationError::UnknownType { .. }));
    }

    #[test]
    fn company_type_serialises_upper_case() {
        let value = serde_json::to_value(CompanyType::Pyme).expect("type serialises");
        assert_eq!(value, "PYME");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn name_rejects_blank_values(#[case] raw: &str) {
        let error = CompanyName::new(raw).expect_err("blank name fails");
        assert_eq!(error, CompanyValidationError::EmptyName);
    }

    #[test]
    fn name_preserves_interior_whitespace() {
        let name = CompanyName::new("Corpo  2  SRL").expect("valid name");
        assert_eq!(name.as_str(), "Corpo  2  SRL");
    }
}
