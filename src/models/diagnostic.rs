//! Diagnostic scan results

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::Severity;

/// A rule match located in the scanned text
///
/// `start` and `end` are byte offsets into the scanned text, end exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchSpan {
    pub rule_id: String,
    pub severity: Severity,
    /// 1-based line number
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// Match counts per severity tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScanSummary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl ScanSummary {
    pub fn from_spans(spans: &[MatchSpan]) -> Self {
        spans.iter().fold(Self::default(), |mut summary, span| {
            match span.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.infos += 1,
            }
            summary
        })
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Full result of a scan
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScanReport {
    pub spans: Vec<MatchSpan>,
    pub summary: ScanSummary,
}

impl ScanReport {
    pub fn new(spans: Vec<MatchSpan>) -> Self {
        let summary = ScanSummary::from_spans(&spans);
        Self { spans, summary }
    }

    pub fn has_errors(&self) -> bool {
        self.summary.has_errors()
    }

    /// Spans of a single tier, in discovery order
    pub fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &MatchSpan> {
        self.spans.iter().filter(move |s| s.severity == severity)
    }
}

/// Public view of a diagnostic rule
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RuleView {
    pub id: String,
    pub severity: Severity,
    pub pattern: String,
    pub unless: Vec<String>,
    pub description: String,
}
