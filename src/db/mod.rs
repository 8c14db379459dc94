//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows, insert payloads and closed enums
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: `DirectoryStorage`, the query/insert surface used by handlers

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Accreditation, ContactInquiry, Provider};
pub use schema::SQLITE_INIT;
pub use sqlite::{DirectoryStorage, SqlitePool};
