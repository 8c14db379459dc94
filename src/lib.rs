pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod types;

pub use config::Config;
pub use db::DirectoryStorage;
pub use error::{ApiError, DirectoryError};
