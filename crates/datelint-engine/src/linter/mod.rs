//! Datelint Linter
//!
//! Tree-based lint analysis over compilation units handed over by a front
//! end that has already parsed and (ideally) resolved the source.
//!
//! # Architecture
//!
//! - Each rule implements [`LintRule`] and checks individual tree nodes.
//! - The [`LintRunner`](runner::LintRunner) walks the tree once and dispatches
//!   to all enabled rules (single-pass visitor).
//! - [`Linter`] is the public entry point: create one, then call
//!   [`lint_unit`](Linter::lint_unit).
//! - [`report`] renders results for terminals (codespan) or machines (JSON).
//!
//! # Example
//!
//! ```ignore
//! use datelint_engine::linter::{Linter, Severity};
//!
//! let linter = Linter::new();
//! let result = linter.lint_unit(&unit, &interner, Some(&model), "Dates.java");
//! for d in &result.diagnostics {
//!     println!("[{}] {}: {}", d.code, d.rule, d.message);
//! }
//! ```

pub mod config;
pub mod report;
pub mod rule;
pub mod rules;
mod runner;

pub use config::LintConfig;
pub use rule::{Category, LintContext, LintDiagnostic, LintRule, RuleMeta, Severity};

use datelint_syntax::ast::CompilationUnit;
use datelint_syntax::{Interner, SemanticModel};
use runner::LintRunner;
use serde::Serialize;

/// Result of linting a single file.
#[derive(Debug, Clone, Serialize)]
pub struct LintResult {
    /// All diagnostics emitted for this file.
    pub diagnostics: Vec<LintDiagnostic>,
    /// File path that was linted.
    pub file_path: String,
}

impl LintResult {
    /// Whether any diagnostic is reported at error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }
}

/// The linter. Holds a set of enabled rules and configuration.
///
/// Rules are stateless, so one `Linter` can be shared across threads and
/// used for any number of units.
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
}

impl Linter {
    /// Create a linter with all default rules and default severities.
    pub fn new() -> Self {
        Self {
            rules: rules::all_rules(),
            config: LintConfig::new(),
        }
    }

    /// Create a linter with configuration overrides.
    pub fn with_config(config: LintConfig) -> Self {
        Self {
            rules: rules::all_rules(),
            config,
        }
    }

    /// Metadata of every registered rule, in registration order.
    pub fn rule_metas(&self) -> Vec<&RuleMeta> {
        self.rules.iter().map(|r| r.meta()).collect()
    }

    /// Lint a compilation unit.
    ///
    /// `semantic` is `None` when the front end could not resolve the unit;
    /// rules that depend on symbol information then stay silent.
    pub fn lint_unit(
        &self,
        unit: &CompilationUnit,
        interner: &Interner,
        semantic: Option<&SemanticModel>,
        file_path: &str,
    ) -> LintResult {
        let active_rules: Vec<&dyn LintRule> = self
            .rules
            .iter()
            .map(|r| r.as_ref())
            .filter(|r| !self.config.is_disabled(r.meta().name))
            .collect();

        tracing::debug!(
            file = file_path,
            rules = active_rules.len(),
            statements = unit.len(),
            resolved = semantic.is_some(),
            "linting unit"
        );

        let ctx = LintContext {
            interner,
            semantic,
            file_path,
        };

        let runner = LintRunner::new(&active_rules, ctx);
        let mut diagnostics = runner.run(unit);

        // Apply severity overrides and filter disabled.
        diagnostics.retain_mut(|d| {
            let eff = self.config.effective_severity(d.rule, d.severity);
            if eff == Severity::Off {
                return false;
            }
            d.severity = eff;
            true
        });

        tracing::debug!(
            file = file_path,
            diagnostics = diagnostics.len(),
            "lint finished"
        );

        LintResult {
            diagnostics,
            file_path: file_path.to_string(),
        }
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
