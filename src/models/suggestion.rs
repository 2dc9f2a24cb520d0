//! FAST suggestion models

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::enums::HeadingType;

/// One candidate heading as returned by the FAST suggestion service
///
/// The service is loose about scalar types (`tag` and `idroot` arrive as
/// numbers or strings, `suggestall` as a string or an array of strings), so
/// every field is read leniently into a string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SuggestionRecord {
    /// Heading text matched by the query
    #[serde(rename = "suggestall", default, deserialize_with = "lenient_string")]
    pub suggest_all: String,
    /// FAST authority identifier
    #[serde(rename = "idroot", default, deserialize_with = "lenient_string")]
    pub id_root: String,
    /// Authorized form of the heading
    #[serde(default, deserialize_with = "lenient_string")]
    pub auth: String,
    /// Authority field tag (1xx)
    #[serde(default, deserialize_with = "lenient_string")]
    pub tag: String,
    #[serde(rename = "type", default)]
    pub heading_type: HeadingType,
    /// Authorized form in $a-z subdivision form, empty when identical to `auth`
    #[serde(default, deserialize_with = "lenient_string")]
    pub raw: String,
    /// Authorized form with MARC breaker coding for diacritics
    #[serde(default, deserialize_with = "lenient_string")]
    pub breaker: String,
    /// Heading first indicator
    #[serde(default, deserialize_with = "lenient_string")]
    pub indicator: String,
}

/// Autocomplete candidate handed to the editing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Suggestion {
    /// Heading matched on
    pub label: String,
    /// Citation inserted into the record when the candidate is selected
    pub value: String,
    pub idroot: String,
    pub auth: String,
    pub tag: String,
    #[serde(rename = "type")]
    pub heading_type: HeadingType,
    pub raw: String,
    pub breaker: String,
    pub indicator: String,
}

impl Suggestion {
    /// Pair a record with the citation built from it
    pub fn new(record: SuggestionRecord, value: String) -> Self {
        Self {
            label: record.suggest_all,
            value,
            idroot: record.id_root,
            auth: record.auth,
            tag: record.tag,
            heading_type: record.heading_type,
            raw: record.raw,
            breaker: record.breaker,
            indicator: record.indicator,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(&value))
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Arrays read the way a browser stringifies them
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}
