//! Lint rule trait and supporting types.
//!
//! Each lint rule implements `LintRule` and provides metadata (`RuleMeta`),
//! and one or more `check_*` methods that inspect tree nodes.

use datelint_syntax::ast;
use datelint_syntax::{Interner, SemanticModel, Span};
use serde::Serialize;

/// Severity level for a lint diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Reports as a warning (does not affect exit code).
    Warn,
    /// Reports as an error (causes non-zero exit code).
    Error,
}

impl Severity {
    /// Parse a config spelling: `off`, `warn`/`warning`, `error`.
    pub fn parse(s: &str) -> Option<Severity> {
        match s {
            "off" => Some(Severity::Off),
            "warn" | "warning" => Some(Severity::Warn),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

/// Category of a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Likely bugs or logic errors.
    Correctness,
}

/// Static metadata for a lint rule.
pub struct RuleMeta {
    /// Rule name, e.g. "invalid-date-values".
    pub name: &'static str,
    /// Lint code, e.g. "L1013".
    pub code: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Category.
    pub category: Category,
    /// Default severity when no config override is set.
    pub default_severity: Severity,
    /// Free-form tags, e.g. "bug".
    pub tags: &'static [&'static str],
    /// Estimated minutes to fix one occurrence.
    pub remediation_minutes: u32,
}

/// Context passed to each rule during lint checking.
pub struct LintContext<'a> {
    /// Names used by the tree and the symbol table.
    pub interner: &'a Interner,
    /// Symbol table, when the front end could resolve this unit. Rules that
    /// need declaring types or symbol owners do nothing without it.
    pub semantic: Option<&'a SemanticModel>,
    /// Path of the file being linted.
    pub file_path: &'a str,
}

/// A single lint diagnostic emitted by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintDiagnostic {
    /// Rule name (e.g. "invalid-date-values").
    pub rule: &'static str,
    /// Lint code (e.g. "L1013").
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Source location.
    pub span: Span,
    /// Severity level.
    pub severity: Severity,
    /// Additional notes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Trait that every lint rule must implement.
///
/// Rules receive every expression node of the unit and return diagnostics.
/// The default implementation returns none.
pub trait LintRule: Send + Sync {
    /// Static metadata for this rule.
    fn meta(&self) -> &RuleMeta;

    /// Check an expression node.
    fn check_expression(
        &self,
        _expr: &ast::Expression,
        _ctx: &LintContext<'_>,
    ) -> Vec<LintDiagnostic> {
        vec![]
    }
}
