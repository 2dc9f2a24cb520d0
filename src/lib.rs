//! Buzz - MARC record checking service
//!
//! Backs the MARC record editing page: FAST subject heading suggestions
//! formatted as breaker citations, line-oriented diagnostics over raw MARC
//! breaker text, and navigation through the record server.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod marc;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build every service from the configuration
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let services = services::Services::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}
