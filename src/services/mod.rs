//! Business logic services

pub mod diagnostics;
pub mod records;
pub mod suggest;

use crate::{config::AppConfig, error::AppResult};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub suggest: suggest::SuggestService,
    pub diagnostics: diagnostics::DiagnosticsService,
    pub records: records::RecordNavigator,
}

impl Services {
    /// Create all services from the application configuration
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            suggest: suggest::SuggestService::new(config.suggest.clone())?,
            diagnostics: diagnostics::DiagnosticsService::new(&config.diagnostics)?,
            records: records::RecordNavigator::new(&config.records)?,
        })
    }
}
