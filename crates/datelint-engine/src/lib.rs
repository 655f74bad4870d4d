//! Datelint Engine
//!
//! Lint framework over resolved syntax trees and the `invalid-date-values`
//! rule, which flags calendar and date field values that can never be valid
//! (`setMonth(12)`, `cal.set(Calendar.HOUR_OF_DAY, 24)`,
//! `new GregorianCalendar(2020, 12, 1)`, `cal.get(Calendar.DAY_OF_MONTH) == 32`).
//!
//! # Example
//!
//! ```rust,ignore
//! use datelint_engine::linter::Linter;
//!
//! let linter = Linter::new();
//! let result = linter.lint_unit(&unit, &interner, Some(&model), "Dates.java");
//! for d in &result.diagnostics {
//!     println!("[{}] {}: {}", d.code, d.rule, d.message);
//! }
//! ```

#![warn(rust_2018_idioms)]

pub mod error;
pub mod linter;

pub use error::{ConfigError, ReportError};
pub use linter::{LintConfig, LintDiagnostic, LintResult, Linter, Severity};
