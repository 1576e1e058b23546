//! Error types for records and batch reports.
//!
//! A batch failure always aborts the whole input, so every variant carries
//! enough context (path, column, raw value, line) to fix the source data.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a batch of course rows.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input file could not be located.
    #[error("file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    /// A required column is absent from the header or from a row.
    #[error("missing required column '{field}' (line {line})")]
    MissingField { field: String, line: u64 },

    /// A numeric column holds something that is not a usable number.
    #[error("invalid data in column '{field}' (line {line}): '{value}'")]
    InvalidValue {
        field: String,
        value: String,
        line: u64,
    },

    /// The input exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV framing itself is broken.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl BatchError {
    /// The column involved in the failure, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            BatchError::MissingField { field, .. } | BatchError::InvalidValue { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }

    /// Returns `true` if the failure lies in the data rather than the file.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            BatchError::MissingField { .. } | BatchError::InvalidValue { .. }
        )
    }
}

/// Violations of the record invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters, got {len}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("marks must be between 0 and 100, got {0}")]
    MarksOutOfRange(f64),

    #[error("credits must be greater than 0, got {0}")]
    NonPositiveCredits(f64),

    #[error("semester number must be at least 1, got {0}")]
    InvalidSemesterNumber(u32),
}
