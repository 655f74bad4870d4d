//! Lint configuration: per-rule severity overrides.
//!
//! Loaded from the `[lint.rules]` table of a TOML manifest:
//!
//! ```toml
//! [lint.rules]
//! invalid-date-values = "warn"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use super::rule::Severity;
use crate::error::ConfigError;

/// Configuration for the linter.
#[derive(Debug, Clone, Default)]
pub struct LintConfig {
    /// Per-rule severity overrides. Key = rule name (e.g. "invalid-date-values").
    overrides: HashMap<String, Severity>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    lint: Option<LintSection>,
}

#[derive(Debug, Default, Deserialize)]
struct LintSection {
    #[serde(default)]
    rules: BTreeMap<String, String>,
}

impl LintConfig {
    /// Create a new empty config (all rules use their default severity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from manifest text. A manifest without a `[lint]`
    /// table yields an empty config.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let manifest: Manifest = toml::from_str(text)?;
        let mut config = LintConfig::new();
        for (rule, value) in manifest.lint.unwrap_or_default().rules {
            let severity = Severity::parse(&value).ok_or_else(|| ConfigError::UnknownSeverity {
                rule: rule.clone(),
                value: value.clone(),
            })?;
            config.set_severity(&rule, severity);
        }
        Ok(config)
    }

    /// Read and parse a manifest file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the severity for a specific rule.
    pub fn set_severity(&mut self, rule_name: &str, severity: Severity) {
        self.overrides.insert(rule_name.to_string(), severity);
    }

    /// Get the effective severity for a rule, falling back to its default.
    pub fn effective_severity(&self, rule_name: &str, default: Severity) -> Severity {
        self.overrides.get(rule_name).copied().unwrap_or(default)
    }

    /// Check if a rule is explicitly disabled.
    pub fn is_disabled(&self, rule_name: &str) -> bool {
        self.overrides.get(rule_name) == Some(&Severity::Off)
    }
}
