//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity tier of a diagnostic rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// All tiers, in display order
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    /// Highlight colour used by the editing page for this tier
    pub fn colour(&self) -> &'static str {
        match self {
            Severity::Error => "red",
            Severity::Warning => "orange",
            Severity::Info => "green",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// FormatMode
// ---------------------------------------------------------------------------

/// Transcription mode of the record editor
///
/// `Breaker` writes subfield delimiters as `$a`, `Aleph` as `$$a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    #[default]
    Breaker,
    Aleph,
}

impl FormatMode {
    /// Subfield delimiter as written in this mode
    pub fn delimiter(&self) -> &'static str {
        match self {
            FormatMode::Breaker => "$",
            FormatMode::Aleph => "$$",
        }
    }
}

impl std::fmt::Display for FormatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FormatMode::Breaker => "Breaker",
            FormatMode::Aleph => "Aleph",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// HeadingType
// ---------------------------------------------------------------------------

/// Whether a suggested heading is the authorized form or a see-also form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HeadingType {
    #[default]
    Auth,
    Alt,
    #[serde(other)]
    Unknown,
}
