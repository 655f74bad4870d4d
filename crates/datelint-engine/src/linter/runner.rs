//! Lint runner: a single-pass tree visitor that dispatches to all enabled rules.

use datelint_syntax::ast::{self, visitor, Visitor};

use super::rule::{LintContext, LintDiagnostic, LintRule};

/// Runs all enabled lint rules over a compilation unit in a single traversal.
pub struct LintRunner<'a> {
    rules: &'a [&'a dyn LintRule],
    ctx: LintContext<'a>,
    diagnostics: Vec<LintDiagnostic>,
}

impl<'a> LintRunner<'a> {
    /// Create a new runner with the given rules and context.
    pub fn new(rules: &'a [&'a dyn LintRule], ctx: LintContext<'a>) -> Self {
        Self {
            rules,
            ctx,
            diagnostics: Vec::new(),
        }
    }

    /// Run all rules over the unit and return collected diagnostics.
    pub fn run(mut self, unit: &ast::CompilationUnit) -> Vec<LintDiagnostic> {
        self.visit_compilation_unit(unit);

        self.diagnostics
    }
}

impl<'a> Visitor for LintRunner<'a> {
    fn visit_expression(&mut self, expr: &ast::Expression) {
        for rule in self.rules {
            self.diagnostics.extend(rule.check_expression(expr, &self.ctx));
        }
        visitor::walk_expression(self, expr);
    }
}
