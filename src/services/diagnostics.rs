//! MARC diagnostics service

use std::sync::Arc;

use crate::{
    config::DiagnosticsConfig,
    error::AppResult,
    marc::{RuleTable, ScanContext, Scanner},
    models::{FormatMode, ScanReport},
};

#[derive(Clone)]
pub struct DiagnosticsService {
    scanner: Scanner,
}

impl DiagnosticsService {
    /// Load the configured rule table, or the built-in one
    pub fn new(config: &DiagnosticsConfig) -> AppResult<Self> {
        let table = match &config.rules_path {
            Some(path) => {
                tracing::info!("Loading diagnostic rules from {}", path);
                RuleTable::from_path(path)?
            }
            None => RuleTable::builtin().clone(),
        };

        tracing::info!("Diagnostic rules v{}: {} rules", table.version(), table.len());
        Ok(Self::with_table(Arc::new(table)))
    }

    pub fn with_table(table: Arc<RuleTable>) -> Self {
        Self {
            scanner: Scanner::new(table),
        }
    }

    pub fn rules(&self) -> &RuleTable {
        self.scanner.table()
    }

    pub fn scan(&self, text: &str, mode: FormatMode) -> ScanReport {
        let report = self.scanner.report(text, ScanContext::new(mode));
        tracing::debug!(
            "Scanned {} bytes: {} errors, {} warnings, {} infos",
            text.len(),
            report.summary.errors,
            report.summary.warnings,
            report.summary.infos
        );
        report
    }
}
