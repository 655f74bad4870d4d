//! Rendering of lint results
//!
//! Terminal output goes through `codespan-reporting` so diagnostics show the
//! offending source line with the literal underlined. JSON output is meant
//! for editors and CI annotations.

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use serde::{Deserialize, Serialize};
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::rule::{LintDiagnostic, Severity};
use super::LintResult;
use crate::error::ReportError;

/// Convert a lint diagnostic into a codespan diagnostic for `file_id`.
///
/// Returns `None` for diagnostics at [`Severity::Off`].
pub fn to_codespan(diag: &LintDiagnostic, file_id: usize) -> Option<Diagnostic<usize>> {
    let base = match diag.severity {
        Severity::Error => Diagnostic::error(),
        Severity::Warn => Diagnostic::warning(),
        Severity::Off => return None,
    };

    Some(
        base.with_message(&diag.message)
            .with_code(diag.code)
            .with_labels(vec![
                Label::primary(file_id, diag.span.start..diag.span.end).with_message(diag.rule)
            ])
            .with_notes(diag.notes.clone()),
    )
}

/// Render every diagnostic of `result` against `source` into `writer`.
pub fn emit(
    result: &LintResult,
    source: &str,
    writer: &mut dyn WriteColor,
) -> Result<(), ReportError> {
    let mut files = SimpleFiles::new();
    let file_id = files.add(result.file_path.clone(), source.to_string());
    let config = term::Config::default();

    for diag in result.diagnostics.iter().filter_map(|d| to_codespan(d, file_id)) {
        term::emit(writer, &config, &files, &diag)?;
    }
    Ok(())
}

/// Render to stderr with colors when the terminal supports them.
pub fn emit_stderr(result: &LintResult, source: &str) -> Result<(), ReportError> {
    let mut writer = StandardStream::stderr(ColorChoice::Auto);
    emit(result, source, &mut writer)
}

/// JSON representation of one file's results.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonFileReport {
    /// File path
    pub file: String,
    /// Diagnostics, in traversal order
    pub diagnostics: Vec<JsonDiagnostic>,
}

/// JSON representation of a single diagnostic.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonDiagnostic {
    /// Lint code (e.g. "L1013")
    pub code: String,
    /// Rule name
    pub rule: String,
    /// "error" or "warn"
    pub severity: String,
    /// Message text
    pub message: String,
    /// Byte offset of the start of the span
    pub start: usize,
    /// Byte offset one past the end of the span
    pub end: usize,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
    /// Additional notes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl JsonDiagnostic {
    fn from_lint(d: &LintDiagnostic) -> Option<Self> {
        let severity = match d.severity {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Off => return None,
        };
        Some(JsonDiagnostic {
            code: d.code.to_string(),
            rule: d.rule.to_string(),
            severity: severity.to_string(),
            message: d.message.clone(),
            start: d.span.start,
            end: d.span.end,
            line: d.span.line,
            column: d.span.column,
            notes: d.notes.clone(),
        })
    }
}

/// Serialize a batch of results as a JSON array, one entry per file.
pub fn to_json(results: &[LintResult]) -> Result<String, ReportError> {
    let reports: Vec<JsonFileReport> = results
        .iter()
        .map(|r| JsonFileReport {
            file: r.file_path.clone(),
            diagnostics: r.diagnostics.iter().filter_map(JsonDiagnostic::from_lint).collect(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}
