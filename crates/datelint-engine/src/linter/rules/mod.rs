//! Rule registry: all available lint rules.

pub mod invalid_date_values;

use super::rule::LintRule;

/// Returns all available lint rules with their default configuration.
pub fn all_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        // Correctness
        Box::new(invalid_date_values::InvalidDateValues::new()),
    ]
}
