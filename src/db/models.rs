use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Certification levels a provider can hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificationLevel {
    #[default]
    Gt1,
    Gt2,
    Gt3,
    Advanced,
    Preferred,
    Premier,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingLevel {
    #[default]
    Essential,
    Advanced,
    GtsCertified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    #[default]
    Active,
    Inactive,
    Pending,
    Suspended,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipTier {
    #[default]
    Basic,
    Professional,
    Premium,
}

/// Workflow state of a visitor's inquiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    #[default]
    New,
    Read,
    Responded,
    Archived,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    Success,
    Failed,
    #[default]
    Pending,
}

/// A certified practitioner listed in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: i64,
    pub wordpress_id: Option<i64>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    pub certification_level: Option<CertificationLevel>,
    pub certification_date: Option<NaiveDate>,
    pub certification_expiry: Option<NaiveDate>,
    pub training_level: Option<TrainingLevel>,

    pub practice_name: Option<String>,
    pub practice_website: Option<String>,
    pub phone_number: Option<String>,

    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub license_number: Option<String>,
    pub profession: Option<String>,
    pub specialties: Option<String>,
    pub years_experience: Option<i64>,
    pub education: Option<String>,
    pub bio: Option<String>,

    pub profile_image: Option<String>,
    pub show_in_directory: Option<bool>,
    pub allow_public_contact: Option<bool>,

    pub membership_status: Option<MembershipStatus>,
    pub membership_tier: Option<MembershipTier>,
    pub join_date: Option<NaiveDate>,
    pub last_updated: Option<NaiveDateTime>,

    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Insertable provider. Unset optional columns fall back to the table defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProvider {
    pub wordpress_id: Option<i64>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub certification_level: Option<CertificationLevel>,
    pub certification_date: Option<NaiveDate>,
    pub certification_expiry: Option<NaiveDate>,
    pub training_level: Option<TrainingLevel>,
    pub practice_name: Option<String>,
    pub practice_website: Option<String>,
    pub phone_number: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub license_number: Option<String>,
    pub profession: Option<String>,
    pub specialties: Option<String>,
    pub years_experience: Option<i64>,
    pub education: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub show_in_directory: Option<bool>,
    pub allow_public_contact: Option<bool>,
    pub membership_status: Option<MembershipStatus>,
    pub membership_tier: Option<MembershipTier>,
}

impl NewProvider {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }
}

/// A certifiable credential type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Accreditation {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub badge_image: Option<String>,
    pub display_order: Option<i64>,
    pub active: Option<bool>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccreditation {
    pub name: String,
    pub description: Option<String>,
    pub badge_image: Option<String>,
    pub display_order: Option<i64>,
    pub active: Option<bool>,
}

/// A credential earned by a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAccreditation {
    pub id: i64,
    pub provider_id: i64,
    pub accreditation_id: i64,
    pub earned_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub certificate_number: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProviderAccreditation {
    pub provider_id: i64,
    pub accreditation_id: i64,
    pub earned_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub certificate_number: Option<String>,
}

/// A continuing-education record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CeCourse {
    pub id: i64,
    pub provider_id: i64,
    pub course_name: String,
    pub course_provider: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub hours: Option<i64>,
    pub certificate_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCeCourse {
    pub provider_id: i64,
    pub course_name: String,
    pub course_provider: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub hours: Option<i64>,
    pub certificate_url: Option<String>,
}

/// A visitor's message about a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub id: i64,
    pub provider_id: i64,
    pub inquirer_name: String,
    pub inquirer_email: String,
    pub inquirer_phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: Option<InquiryStatus>,
    pub created_at: Option<NaiveDateTime>,
}

/// Validated inquiry ready for insert; status is always `NEW` on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactInquiry {
    pub provider_id: i64,
    pub inquirer_name: String,
    pub inquirer_email: String,
    pub inquirer_phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

/// Audit record of one synchronization attempt against the CMS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SyncLogEntry {
    pub id: i64,
    pub entity_type: String,
    pub entity_id: i64,
    pub wordpress_id: Option<i64>,
    pub action: String,
    pub status: Option<SyncStatus>,
    pub error_message: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default)]
pub struct NewSyncLogEntry {
    pub entity_type: String,
    pub entity_id: i64,
    pub wordpress_id: Option<i64>,
    pub action: String,
    pub status: Option<SyncStatus>,
    pub error_message: Option<String>,
}
