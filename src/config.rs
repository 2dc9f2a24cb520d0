//! Configuration management for Buzz server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// FAST suggestion service
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SuggestConfig {
    pub base_url: String,
    /// Index searched when the caller does not name one
    pub query_index: String,
    /// Scheme the editing page is served over; `https` upgrades the service URL
    pub page_scheme: String,
    pub timeout_seconds: u64,
}

/// Record server the navigator posts to
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RecordsConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DiagnosticsConfig {
    /// Replacement rule table; the built-in table is used when unset
    pub rules_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub records: RecordsConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (BUZZ_SERVER__PORT and the like)
            .add_source(
                Environment::with_prefix("BUZZ")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("suggest.base_url", env::var("FAST_SUGGEST_URL").ok())?
            .set_override_option("records.base_url", env::var("RECORD_SERVER_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl SuggestConfig {
    pub fn page_is_secure(&self) -> bool {
        self.page_scheme.eq_ignore_ascii_case("https")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4204,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://fast.oclc.org/searchfast/fastsuggest".to_string(),
            query_index: "suggestall".to_string(),
            page_scheme: "http".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_seconds: 30,
        }
    }
}
