//! Diagnostics scanner
//!
//! Applies every rule of a [`RuleTable`] to every line of a record and
//! reports all matches. Rules are independent: overlapping matches from
//! different rules are all reported.

use std::borrow::Cow;
use std::sync::Arc;

use super::rules::RuleTable;
use crate::models::{FormatMode, MatchSpan, ScanReport};

/// Read-only context a scan runs under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanContext {
    pub mode: FormatMode,
}

impl ScanContext {
    pub fn new(mode: FormatMode) -> Self {
        Self { mode }
    }
}

/// One line prepared for matching
struct ScanLine<'a> {
    number: usize,
    /// Offset of the line in the scanned text
    start: usize,
    content: Cow<'a, str>,
    /// Original offset (relative to `start`) of every byte of `content`, plus
    /// the line end. Only present when `content` was rewritten.
    origin: Option<Vec<usize>>,
}

impl<'a> ScanLine<'a> {
    fn new(number: usize, start: usize, raw: &'a str, mode: FormatMode) -> Self {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        match mode {
            FormatMode::Aleph if raw.contains("$$") => {
                let (content, origin) = collapse_delimiters(raw);
                Self { number, start, content: Cow::Owned(content), origin: Some(origin) }
            }
            _ => Self { number, start, content: Cow::Borrowed(raw), origin: None },
        }
    }

    /// Map an offset in `content` back to the scanned text
    fn offset(&self, index: usize) -> usize {
        match &self.origin {
            Some(origin) => self.start + origin[index],
            None => self.start + index,
        }
    }
}

/// Read each `$$` as a single `$`, recording where every kept byte came from
fn collapse_delimiters(raw: &str) -> (String, Vec<usize>) {
    let bytes = raw.as_bytes();
    let mut content = String::with_capacity(raw.len());
    let mut origin = Vec::with_capacity(raw.len() + 1);

    let mut chars = raw.char_indices();
    while let Some((index, c)) = chars.next() {
        content.push(c);
        origin.extend(index..index + c.len_utf8());
        if c == '$' && bytes.get(index + 1) == Some(&b'$') {
            chars.next();
        }
    }
    origin.push(raw.len());

    (content, origin)
}

/// Applies a rule table to MARC text
#[derive(Debug, Clone)]
pub struct Scanner {
    table: Arc<RuleTable>,
}

impl Scanner {
    pub fn new(table: Arc<RuleTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// All matches in discovery order: by rule, then line, then position
    pub fn scan(&self, text: &str, context: ScanContext) -> Vec<MatchSpan> {
        let lines = split_lines(text, context.mode);
        let mut spans = Vec::new();

        for rule in self.table.rules() {
            for line in &lines {
                for range in rule.find_in_line(&line.content) {
                    spans.push(MatchSpan {
                        rule_id: rule.id.clone(),
                        severity: rule.severity,
                        line: line.number,
                        start: line.offset(range.start),
                        end: line.offset(range.end),
                    });
                }
            }
        }

        spans
    }

    /// Scan and summarise
    pub fn report(&self, text: &str, context: ScanContext) -> ScanReport {
        ScanReport::new(self.scan(text, context))
    }
}

fn split_lines(text: &str, mode: FormatMode) -> Vec<ScanLine<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut start = 0;
    text.split('\n')
        .enumerate()
        .map(|(index, raw)| {
            let line = ScanLine::new(index + 1, start, raw, mode);
            start += raw.len() + 1;
            line
        })
        .collect()
}
