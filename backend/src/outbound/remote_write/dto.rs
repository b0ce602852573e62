//! Wire payloads for the remote company-write endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Company, CompanyDraft, CompanyName, CompanyType};

/// Request body sent to the remote endpoint.
///
/// `createdAt` is omitted when the caller left it unset so the remote end
/// applies its own default, exactly like the local adapter does.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCompanyRequestDto<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl<'a> CreateCompanyRequestDto<'a> {
    pub fn from_draft(draft: &'a CompanyDraft) -> Self {
        Self {
            name: draft.name.as_str(),
            company_type: draft.company_type,
            created_at: draft.created_at,
        }
    }
}

/// Response body returned by the remote endpoint on success.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompanyDto {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
    pub created_at: DateTime<Utc>,
}

impl CompanyDto {
    /// Convert into the domain entity, re-validating the name.
    pub fn into_domain(self) -> Result<Company, String> {
        let name = CompanyName::new(self.name).map_err(|err| err.to_string())?;
        Ok(Company::new(self.id, name, self.company_type, self.created_at))
    }
}
