//! SQL DDL for initializing the directory storage.
//! SQLite-first design; dates are stored as TEXT (`YYYY-MM-DD`,
//! `YYYY-MM-DD HH:MM:SS`) and booleans as INTEGER 0/1.

/// SQLite schema with:
/// - `providers`: UNIQUE `email`, UNIQUE nullable `wordpress_id`
/// - `accreditations`: UNIQUE `name`
/// - `provider_accreditations`, `ce_courses`, `contact_inquiries`: rows owned
///   by a provider (and an accreditation), removed by `ON DELETE CASCADE`
/// - `sync_log`: free-standing audit rows, no foreign keys
///
/// Enum columns carry CHECK constraints mirroring the closed Rust enums.
/// Boolean columns only accept 0/1. Date columns only accept `YYYY-MM-DD` and timestamp columns only
/// `YYYY-MM-DD HH:MM:SS`, so every stored row decodes into the typed models.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS providers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    wordpress_id INTEGER UNIQUE,
    email TEXT NOT NULL UNIQUE,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    certification_level TEXT DEFAULT 'GT1'
        CHECK (certification_level IN ('GT1', 'GT2', 'GT3', 'ADVANCED', 'PREFERRED', 'PREMIER')),
    certification_date TEXT CHECK (certification_date IS NULL OR certification_date = date(certification_date)),
    certification_expiry TEXT CHECK (certification_expiry IS NULL OR certification_expiry = date(certification_expiry)),
    training_level TEXT DEFAULT 'ESSENTIAL'
        CHECK (training_level IN ('ESSENTIAL', 'ADVANCED', 'GTS_CERTIFIED')),
    practice_name TEXT,
    practice_website TEXT,
    phone_number TEXT,
    street_address TEXT,
    city TEXT,
    state_province TEXT,
    postal_code TEXT,
    country TEXT DEFAULT 'United States',
    latitude REAL,
    longitude REAL,
    license_number TEXT,
    profession TEXT,
    specialties TEXT, -- JSON array, serialized as text
    years_experience INTEGER,
    education TEXT,
    bio TEXT,
    profile_image TEXT,
    show_in_directory INTEGER DEFAULT 1 CHECK (show_in_directory IN (0, 1)),
    allow_public_contact INTEGER DEFAULT 1 CHECK (allow_public_contact IN (0, 1)),
    membership_status TEXT DEFAULT 'ACTIVE'
        CHECK (membership_status IN ('ACTIVE', 'INACTIVE', 'PENDING', 'SUSPENDED')),
    membership_tier TEXT DEFAULT 'BASIC'
        CHECK (membership_tier IN ('BASIC', 'PROFESSIONAL', 'PREMIUM')),
    join_date TEXT DEFAULT (DATE('now')) CHECK (join_date IS NULL OR join_date = date(join_date)),
    last_updated TEXT DEFAULT (DATETIME('now')) CHECK (last_updated IS NULL OR last_updated = datetime(last_updated)),
    created_at TEXT DEFAULT (DATETIME('now')) CHECK (created_at IS NULL OR created_at = datetime(created_at)),
    updated_at TEXT DEFAULT (DATETIME('now')) CHECK (updated_at IS NULL OR updated_at = datetime(updated_at))
);

CREATE TABLE IF NOT EXISTS accreditations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT,
    badge_image TEXT,
    display_order INTEGER DEFAULT 0,
    active INTEGER DEFAULT 1 CHECK (active IN (0, 1)),
    created_at TEXT DEFAULT (DATETIME('now')) CHECK (created_at IS NULL OR created_at = datetime(created_at))
);

CREATE TABLE IF NOT EXISTS provider_accreditations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    provider_id INTEGER NOT NULL REFERENCES providers(id) ON DELETE CASCADE,
    accreditation_id INTEGER NOT NULL REFERENCES accreditations(id) ON DELETE CASCADE,
    earned_date TEXT CHECK (earned_date IS NULL OR earned_date = date(earned_date)),
    expiry_date TEXT CHECK (expiry_date IS NULL OR expiry_date = date(expiry_date)),
    certificate_number TEXT,
    created_at TEXT DEFAULT (DATETIME('now')) CHECK (created_at IS NULL OR created_at = datetime(created_at))
);

CREATE TABLE IF NOT EXISTS ce_courses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    provider_id INTEGER NOT NULL REFERENCES providers(id) ON DELETE CASCADE,
    course_name TEXT NOT NULL,
    course_provider TEXT,
    completion_date TEXT CHECK (completion_date IS NULL OR completion_date = date(completion_date)),
    hours INTEGER,
    certificate_url TEXT,
    created_at TEXT DEFAULT (DATETIME('now')) CHECK (created_at IS NULL OR created_at = datetime(created_at))
);

CREATE TABLE IF NOT EXISTS contact_inquiries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    provider_id INTEGER NOT NULL REFERENCES providers(id) ON DELETE CASCADE,
    inquirer_name TEXT NOT NULL,
    inquirer_email TEXT NOT NULL,
    inquirer_phone TEXT,
    subject TEXT,
    message TEXT NOT NULL,
    status TEXT DEFAULT 'NEW'
        CHECK (status IN ('NEW', 'READ', 'RESPONDED', 'ARCHIVED')),
    created_at TEXT DEFAULT (DATETIME('now')) CHECK (created_at IS NULL OR created_at = datetime(created_at))
);

CREATE TABLE IF NOT EXISTS sync_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    entity_type TEXT NOT NULL,
    entity_id INTEGER NOT NULL,
    wordpress_id INTEGER,
    action TEXT NOT NULL,
    status TEXT DEFAULT 'PENDING'
        CHECK (status IN ('SUCCESS', 'FAILED', 'PENDING')),
    error_message TEXT,
    created_at TEXT DEFAULT (DATETIME('now')) CHECK (created_at IS NULL OR created_at = datetime(created_at))
);

CREATE INDEX IF NOT EXISTS idx_provider_accreditations_provider ON provider_accreditations(provider_id);
CREATE INDEX IF NOT EXISTS idx_ce_courses_provider ON ce_courses(provider_id);
CREATE INDEX IF NOT EXISTS idx_contact_inquiries_provider ON contact_inquiries(provider_id)
"#;
