//! Data models for Buzz

pub mod diagnostic;
pub mod enums;
pub mod record;
pub mod suggestion;

// Re-export commonly used types
pub use diagnostic::{MatchSpan, RuleView, ScanReport, ScanSummary};
pub use enums::{FormatMode, HeadingType, Severity};
pub use record::{NavigationMode, RecordFragment, RecordFragmentResponse};
pub use suggestion::{Suggestion, SuggestionRecord};
