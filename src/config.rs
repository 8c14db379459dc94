use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Runtime configuration.
///
/// Sources, later ones overriding earlier ones:
/// - built-in defaults
/// - `config.toml` in the working directory (optional)
/// - `DIRECTORY_*` environment variables, e.g. `DIRECTORY_DATABASE_URL`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Browser origins allowed by CORS.
    pub cors_origins: Vec<Url>,
    /// Period of the scheduled CMS sync trigger; 0 disables it.
    pub sync_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:directory.sqlite".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            cors_origins: ["https://dazzling-tiger-zoom.pages.dev", "http://localhost:5173"]
                .iter()
                .filter_map(|s| Url::parse(s).ok())
                .collect(),
            sync_interval_secs: 3600,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("DIRECTORY_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// Origins as sent in the `Origin` header (scheme://host[:port], no path).
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_origins
            .iter()
            .map(|u| u.origin().ascii_serialization())
            .collect()
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs)
    }
}
