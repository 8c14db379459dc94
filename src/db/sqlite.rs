use crate::db::models::{
    Accreditation, CeCourse, ContactInquiry, InquiryStatus, MembershipStatus, NewAccreditation,
    NewCeCourse, NewContactInquiry, NewProvider, NewProviderAccreditation, NewSyncLogEntry,
    Provider, ProviderAccreditation, SyncLogEntry,
};
use crate::db::schema::SQLITE_INIT;
use crate::error::DirectoryError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

const DEFAULT_COUNTRY: &str = "United States";

/// Handle over the directory tables. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct DirectoryStorage {
    pool: SqlitePool,
}

impl DirectoryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` with
    /// foreign-key enforcement on every connection.
    pub async fn connect(database_url: &str) -> Result<Self, DirectoryError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Each in-memory connection is its own database: pin exactly one.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };
        Ok(Self::new(pool))
    }

    /// In-memory storage with the schema applied.
    pub async fn in_memory() -> Result<Self, DirectoryError> {
        let storage = Self::connect("sqlite::memory:").await?;
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), DirectoryError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn insert_provider(&self, p: NewProvider) -> Result<Provider, DirectoryError> {
        sqlx::query_as::<_, Provider>(
            r#"
            INSERT INTO providers (
                wordpress_id, email, first_name, last_name,
                certification_level, certification_date, certification_expiry, training_level,
                practice_name, practice_website, phone_number,
                street_address, city, state_province, postal_code, country, latitude, longitude,
                license_number, profession, specialties, years_experience, education, bio,
                profile_image, show_in_directory, allow_public_contact,
                membership_status, membership_tier
            ) VALUES (
                ?, ?, ?, ?,
                ?, ?, ?, ?,
                ?, ?, ?,
                ?, ?, ?, ?, ?, ?, ?,
                ?, ?, ?, ?, ?, ?,
                ?, ?, ?,
                ?, ?
            )
            RETURNING *
            "#,
        )
        .bind(p.wordpress_id)
        .bind(p.email)
        .bind(p.first_name)
        .bind(p.last_name)
        .bind(p.certification_level.unwrap_or_default())
        .bind(p.certification_date)
        .bind(p.certification_expiry)
        .bind(p.training_level.unwrap_or_default())
        .bind(p.practice_name)
        .bind(p.practice_website)
        .bind(p.phone_number)
        .bind(p.street_address)
        .bind(p.city)
        .bind(p.state_province)
        .bind(p.postal_code)
        .bind(p.country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()))
        .bind(p.latitude)
        .bind(p.longitude)
        .bind(p.license_number)
        .bind(p.profession)
        .bind(p.specialties)
        .bind(p.years_experience)
        .bind(p.education)
        .bind(p.bio)
        .bind(p.profile_image)
        .bind(p.show_in_directory.unwrap_or(true))
        .bind(p.allow_public_contact.unwrap_or(true))
        .bind(p.membership_status.unwrap_or_default())
        .bind(p.membership_tier.unwrap_or_default())
        .fetch_one(&self.pool)
        .await
        .map_err(DirectoryError::from_insert)
    }

    /// Providers shown in the public directory: visible and ACTIVE.
    pub async fn list_directory_providers(&self) -> Result<Vec<Provider>, DirectoryError> {
        let rows = sqlx::query_as::<_, Provider>(
            r#"SELECT * FROM providers
               WHERE show_in_directory = 1 AND membership_status = ?
               ORDER BY id"#,
        )
        .bind(MembershipStatus::Active)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_provider(&self, id: i64) -> Result<Option<Provider>, DirectoryError> {
        let row = sqlx::query_as::<_, Provider>("SELECT * FROM providers WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Delete a provider and, through the foreign keys, everything it owns.
    /// Returns whether a row was removed.
    pub async fn delete_provider(&self, id: i64) -> Result<bool, DirectoryError> {
        let res = sqlx::query("DELETE FROM providers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn insert_accreditation(
        &self,
        a: NewAccreditation,
    ) -> Result<Accreditation, DirectoryError> {
        sqlx::query_as::<_, Accreditation>(
            r#"
            INSERT INTO accreditations (name, description, badge_image, display_order, active)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(a.name)
        .bind(a.description)
        .bind(a.badge_image)
        .bind(a.display_order.unwrap_or(0))
        .bind(a.active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(DirectoryError::from_insert)
    }

    /// Active accreditations by `display_order`; ties keep insertion order.
    pub async fn list_active_accreditations(&self) -> Result<Vec<Accreditation>, DirectoryError> {
        let rows = sqlx::query_as::<_, Accreditation>(
            r#"SELECT * FROM accreditations
               WHERE active = 1
               ORDER BY display_order ASC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn delete_accreditation(&self, id: i64) -> Result<bool, DirectoryError> {
        let res = sqlx::query("DELETE FROM accreditations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn insert_provider_accreditation(
        &self,
        pa: NewProviderAccreditation,
    ) -> Result<ProviderAccreditation, DirectoryError> {
        sqlx::query_as::<_, ProviderAccreditation>(
            r#"
            INSERT INTO provider_accreditations (
                provider_id, accreditation_id, earned_date, expiry_date, certificate_number
            ) VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(pa.provider_id)
        .bind(pa.accreditation_id)
        .bind(pa.earned_date)
        .bind(pa.expiry_date)
        .bind(pa.certificate_number)
        .fetch_one(&self.pool)
        .await
        .map_err(DirectoryError::from_insert)
    }

    pub async fn list_provider_accreditations(
        &self,
        provider_id: i64,
    ) -> Result<Vec<ProviderAccreditation>, DirectoryError> {
        let rows = sqlx::query_as::<_, ProviderAccreditation>(
            "SELECT * FROM provider_accreditations WHERE provider_id = ? ORDER BY id",
        )
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn insert_ce_course(&self, c: NewCeCourse) -> Result<CeCourse, DirectoryError> {
        sqlx::query_as::<_, CeCourse>(
            r#"
            INSERT INTO ce_courses (
                provider_id, course_name, course_provider, completion_date, hours, certificate_url
            ) VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(c.provider_id)
        .bind(c.course_name)
        .bind(c.course_provider)
        .bind(c.completion_date)
        .bind(c.hours)
        .bind(c.certificate_url)
        .fetch_one(&self.pool)
        .await
        .map_err(DirectoryError::from_insert)
    }

    pub async fn list_ce_courses(&self, provider_id: i64) -> Result<Vec<CeCourse>, DirectoryError> {
        let rows = sqlx::query_as::<_, CeCourse>(
            "SELECT * FROM ce_courses WHERE provider_id = ? ORDER BY id",
        )
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn insert_contact_inquiry(
        &self,
        inquiry: NewContactInquiry,
    ) -> Result<ContactInquiry, DirectoryError> {
        sqlx::query_as::<_, ContactInquiry>(
            r#"
            INSERT INTO contact_inquiries (
                provider_id, inquirer_name, inquirer_email, inquirer_phone, subject, message, status
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(inquiry.provider_id)
        .bind(inquiry.inquirer_name)
        .bind(inquiry.inquirer_email)
        .bind(inquiry.inquirer_phone)
        .bind(inquiry.subject)
        .bind(inquiry.message)
        .bind(InquiryStatus::New)
        .fetch_one(&self.pool)
        .await
        .map_err(DirectoryError::from_insert)
    }

    pub async fn list_contact_inquiries(
        &self,
        provider_id: i64,
    ) -> Result<Vec<ContactInquiry>, DirectoryError> {
        let rows = sqlx::query_as::<_, ContactInquiry>(
            "SELECT * FROM contact_inquiries WHERE provider_id = ? ORDER BY id",
        )
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn insert_sync_log(
        &self,
        entry: NewSyncLogEntry,
    ) -> Result<SyncLogEntry, DirectoryError> {
        sqlx::query_as::<_, SyncLogEntry>(
            r#"
            INSERT INTO sync_log (
                entity_type, entity_id, wordpress_id, action, status, error_message
            ) VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(entry.entity_type)
        .bind(entry.entity_id)
        .bind(entry.wordpress_id)
        .bind(entry.action)
        .bind(entry.status.unwrap_or_default())
        .bind(entry.error_message)
        .fetch_one(&self.pool)
        .await
        .map_err(DirectoryError::from_insert)
    }

    /// Most recent sync attempts first.
    pub async fn list_sync_log(&self, limit: i64) -> Result<Vec<SyncLogEntry>, DirectoryError> {
        let rows = sqlx::query_as::<_, SyncLogEntry>(
            "SELECT * FROM sync_log ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
