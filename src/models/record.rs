//! Record server fragments

use serde::Serialize;
use utoipa::ToSchema;

/// Prefix the record server uses to signal that the input file is exhausted
pub const END_OF_FILE_MARKER: &str = "<p>End of file";

/// HTML fragment returned by a navigation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFragment {
    /// Next record, ready to splice into the page
    Html(String),
    /// Closing page shown once every record has been visited
    EndOfFile(String),
}

impl RecordFragment {
    pub fn from_html(html: String) -> Self {
        if html.starts_with(END_OF_FILE_MARKER) {
            RecordFragment::EndOfFile(html)
        } else {
            RecordFragment::Html(html)
        }
    }

    pub fn is_end_of_file(&self) -> bool {
        matches!(self, RecordFragment::EndOfFile(_))
    }

    pub fn html(&self) -> &str {
        match self {
            RecordFragment::Html(html) | RecordFragment::EndOfFile(html) => html,
        }
    }
}

/// Which records a navigation call should stop on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// The very next record
    Next,
    /// The next record that fails validation
    NextWithErrors,
}

impl NavigationMode {
    /// Record server endpoint for this mode
    pub fn endpoint(&self) -> &'static str {
        match self {
            NavigationMode::Next => "next_record",
            NavigationMode::NextWithErrors => "next_record_with_errors",
        }
    }
}

/// Fragment as returned to the editing page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecordFragmentResponse {
    pub end_of_file: bool,
    pub html: String,
}

impl From<RecordFragment> for RecordFragmentResponse {
    fn from(fragment: RecordFragment) -> Self {
        let end_of_file = fragment.is_end_of_file();
        let html = match fragment {
            RecordFragment::Html(html) | RecordFragment::EndOfFile(html) => html,
        };
        Self { end_of_file, html }
    }
}
