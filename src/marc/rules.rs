//! MARC diagnostics rule table
//!
//! The rules are cataloging policy, kept as a versioned TOML table. The
//! default table is compiled in; a replacement can be loaded from disk at
//! start-up.
//!
//! Each rule is a line-oriented pattern plus optional `unless` patterns. The
//! regex engine has no look-around, so a negative look-ahead such as
//! `^=(?!LDR)...` is written as the positive pattern with an `unless`
//! pattern `^=LDR`: the rule does not fire on lines the exclusion matches.

use std::ops::Range;
use std::path::Path;

use config::{Config, File, FileFormat};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{RuleView, Severity},
};

/// Rule table shipped with the server
pub const DEFAULT_RULES: &str = include_str!("../../config/rules.toml");

static BUILTIN: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::from_toml_str(DEFAULT_RULES).expect("built-in rule table must be valid")
});

#[derive(Debug, Deserialize)]
struct RuleTableFile {
    version: String,
    rules: Vec<RuleDefinition>,
}

/// A rule as written in the table file
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDefinition {
    pub id: String,
    pub severity: Severity,
    pub pattern: String,
    #[serde(default)]
    pub unless: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// A compiled diagnostic rule
#[derive(Debug, Clone)]
pub struct DiagnosticRule {
    pub id: String,
    pub severity: Severity,
    pub description: String,
    pattern: Regex,
    unless: Vec<Regex>,
}

impl DiagnosticRule {
    fn compile(definition: RuleDefinition) -> AppResult<Self> {
        if definition.id.trim().is_empty() {
            return Err(AppError::RuleTable("Rule with empty id".to_string()));
        }
        let compile = |source: &str| {
            Regex::new(source).map_err(|e| {
                AppError::RuleTable(format!("Rule {}: invalid pattern {:?}: {}", definition.id, source, e))
            })
        };

        let pattern = compile(&definition.pattern)?;
        let unless = definition
            .unless
            .iter()
            .map(|source| compile(source))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            id: definition.id,
            severity: definition.severity,
            description: definition.description,
            pattern,
            unless,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether an exclusion pattern suppresses this rule on `line`
    pub fn is_excluded(&self, line: &str) -> bool {
        self.unless.iter().any(|re| re.is_match(line))
    }

    /// Every non-empty match of the rule within a single line
    pub fn find_in_line(&self, line: &str) -> Vec<Range<usize>> {
        if self.is_excluded(line) {
            return Vec::new();
        }
        self.pattern
            .find_iter(line)
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
            .collect()
    }

    pub fn view(&self) -> RuleView {
        RuleView {
            id: self.id.clone(),
            severity: self.severity,
            pattern: self.pattern.as_str().to_string(),
            unless: self.unless.iter().map(|re| re.as_str().to_string()).collect(),
            description: self.description.clone(),
        }
    }
}

/// Ordered, immutable set of diagnostic rules
#[derive(Debug, Clone)]
pub struct RuleTable {
    version: String,
    rules: Vec<DiagnosticRule>,
}

impl RuleTable {
    /// The compiled-in default table
    pub fn builtin() -> &'static RuleTable {
        &BUILTIN
    }

    /// Parse and compile a table from TOML text
    pub fn from_toml_str(source: &str) -> AppResult<Self> {
        let file: RuleTableFile = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| AppError::RuleTable(format!("Failed to read rule table: {}", e)))?;
        Self::compile(file)
    }

    /// Load a table from disk; the format follows the file extension
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file: RuleTableFile = Config::builder()
            .add_source(File::from(path))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                AppError::RuleTable(format!("Failed to read rule table {}: {}", path.display(), e))
            })?;
        Self::compile(file)
    }

    fn compile(file: RuleTableFile) -> AppResult<Self> {
        let mut rules: IndexMap<String, DiagnosticRule> = IndexMap::with_capacity(file.rules.len());
        for definition in file.rules {
            let rule = DiagnosticRule::compile(definition)?;
            if rules.contains_key(&rule.id) {
                return Err(AppError::RuleTable(format!("Duplicate rule id {}", rule.id)));
            }
            rules.insert(rule.id.clone(), rule);
        }

        tracing::debug!("Compiled rule table v{} ({} rules)", file.version, rules.len());

        Ok(Self {
            version: file.version,
            rules: rules.into_values().collect(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn rules(&self) -> &[DiagnosticRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DiagnosticRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Rules of one tier, in table order
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &DiagnosticRule> {
        self.rules.iter().filter(move |rule| rule.severity == severity)
    }
}
