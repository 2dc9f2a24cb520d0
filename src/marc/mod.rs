//! MARC breaker formatting and diagnostics
//!
//! This module builds subject citations from FAST suggestions and checks
//! MARC breaker text against the cataloging rule table.

pub mod breaker;
pub mod rules;
pub mod scanner;

pub use breaker::{breaker_citation, citation_for_mode};
pub use rules::{DiagnosticRule, RuleTable};
pub use scanner::{ScanContext, Scanner};
