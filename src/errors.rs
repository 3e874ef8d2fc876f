/*!
 * Error types for the lexibridge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * The alignment engine itself never returns errors: a missing match is simply
 * a missing row. Errors live at the boundaries (input validation, file I/O,
 * configuration).
 */

use thiserror::Error;

/// Hard data-quality violations found by the validation layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QualityError {
    /// A required field is missing from a record or output structure
    #[error("Missing required field '{field}' in {context}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Where the field was expected (e.g. "es entries")
        context: String,
    },

    /// Records with an empty headword
    #[error("Critical: {count} {lang} entries with empty words")]
    EmptyHeadword {
        /// Language collection the records belong to
        lang: String,
        /// Number of offending records
        count: usize,
    },

    /// Critical issues that make the data unusable downstream
    #[error("Critical issues found: {}", .0.join("; "))]
    CriticalIssues(Vec<String>),

    /// Too many structural problems in the final dictionary
    #[error("Too many critical structural issues: {count} (limit {limit})")]
    StructuralIssues {
        /// Number of structural issues found
        count: usize,
        /// Maximum tolerated before failing
        limit: usize,
    },

    /// Language code not supported in this position
    #[error("Invalid language '{0}'")]
    InvalidLanguage(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error parsing an input record file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input or output failed quality validation
    #[error("Data quality error: {0}")]
    Quality(#[from] QualityError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
