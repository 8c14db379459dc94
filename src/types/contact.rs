use serde::Deserialize;

use crate::db::models::NewContactInquiry;

pub const MISSING_CONTACT_FIELDS: &str =
    "Missing required fields: providerId, inquirerName, inquirerEmail, message";

/// Provider id as submitted by web forms: a JSON integer or a string holding
/// only an integer. Numeric prefixes (`"17abc"`) and fractions (`3.7`) are
/// rejected rather than truncated.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProviderIdInput {
    Number(i64),
    Text(String),
}

impl ProviderIdInput {
    /// Zero, negative and non-numeric ids count as absent.
    fn resolve(&self) -> Option<i64> {
        let id = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().ok()?,
        };
        (id > 0).then_some(id)
    }
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactInquiryRequest {
    pub provider_id: Option<ProviderIdInput>,
    pub inquirer_name: Option<String>,
    pub inquirer_email: Option<String>,
    pub inquirer_phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactInquiryRequest {
    /// Check required fields; empty strings are treated as missing.
    pub fn validate(self) -> Result<NewContactInquiry, &'static str> {
        let provider_id = self.provider_id.as_ref().and_then(ProviderIdInput::resolve);
        let (Some(provider_id), Some(inquirer_name), Some(inquirer_email), Some(message)) = (
            provider_id,
            non_empty(self.inquirer_name),
            non_empty(self.inquirer_email),
            non_empty(self.message),
        ) else {
            return Err(MISSING_CONTACT_FIELDS);
        };

        Ok(NewContactInquiry {
            provider_id,
            inquirer_name,
            inquirer_email,
            inquirer_phone: non_empty(self.inquirer_phone),
            subject: non_empty(self.subject),
            message,
        })
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}
