//! MARC breaker formatting
//!
//! Builds subject-field citations from FAST suggestions and converts record
//! text between the Breaker (`$a`) and Aleph (`$$a`) transcriptions.

use crate::models::{FormatMode, SuggestionRecord};

/// Offset from a FAST authority tag (1xx) to the bibliographic subject tag (6xx)
pub const SUBJECT_TAG_OFFSET: i64 = 500;

/// Second indicator: source of heading specified in $2
const SOURCE_INDICATOR: char = '7';

/// Build the breaker citation for a suggestion
///
/// `=650  #7 $aCats.$2fast$0(OCoLC)fst00849103`
pub fn breaker_citation(record: &SuggestionRecord) -> String {
    let text = if record.raw.is_empty() {
        &record.auth
    } else {
        &record.raw
    };

    format!(
        "={}  {}{} $a{}.$2fast$0(OCoLC){}",
        subject_tag(&record.tag),
        record.indicator.replacen(' ', "#", 1),
        SOURCE_INDICATOR,
        text,
        record.id_root
    )
}

/// Build the citation written the way the editor currently transcribes records
pub fn citation_for_mode(record: &SuggestionRecord, mode: FormatMode) -> String {
    let citation = breaker_citation(record);
    match mode {
        FormatMode::Breaker => citation,
        FormatMode::Aleph => to_aleph(&citation),
    }
}

/// Subject tag for an authority tag; a tag that is not a number (or does
/// not fit once offset) is passed through with the offset appended, as
/// string concatenation would
fn subject_tag(tag: &str) -> String {
    match tag.trim().parse::<i64>().ok().and_then(|n| n.checked_add(SUBJECT_TAG_OFFSET)) {
        Some(n) => n.to_string(),
        None => format!("{}{}", tag, SUBJECT_TAG_OFFSET),
    }
}

/// Collapse Aleph `$$` delimiters to Breaker `$`
pub fn to_breaker(text: &str) -> String {
    let (aleph, breaker) = (FormatMode::Aleph.delimiter(), FormatMode::Breaker.delimiter());
    text.replace(aleph, breaker).replace(aleph, breaker)
}

/// Double every delimiter; text already in Aleph form is left as it is
pub fn to_aleph(text: &str) -> String {
    to_breaker(text).replace(FormatMode::Breaker.delimiter(), FormatMode::Aleph.delimiter())
}

/// Convert record text to the given mode
pub fn convert(text: &str, mode: FormatMode) -> String {
    match mode {
        FormatMode::Breaker => to_breaker(text),
        FormatMode::Aleph => to_aleph(text),
    }
}
