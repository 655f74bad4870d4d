//! Error types for configuration loading and diagnostic rendering
//!
//! Rule evaluation itself has no error path: a call site the rule cannot
//! interpret is simply not reported.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a lint configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read lint config '{}': {source}", .path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape
    #[error("Invalid lint config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A rule was given a severity other than off/warn/error
    #[error("Unknown severity '{value}' for rule '{rule}' (expected off, warn or error)")]
    UnknownSeverity {
        /// Rule name
        rule: String,
        /// Severity string as written
        value: String,
    },
}

/// Errors raised while rendering diagnostics
#[derive(Debug, Error)]
pub enum ReportError {
    /// A diagnostic span does not fit the supplied source, or the output
    /// stream failed
    #[error("Failed to render diagnostic: {0}")]
    Render(#[from] codespan_reporting::files::Error),

    /// JSON serialization failed
    #[error("Failed to serialize diagnostics: {0}")]
    Json(#[from] serde_json::Error),
}
