//! Error types for input validation and roster loading

use thiserror::Error;

/// Rejected request fields. The assessment itself never fails.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} must be between 0 and 744 hours, got {value}")]
    InvalidHours { field: &'static str, value: f64 },

    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    DateFormat { value: String },

    #[error("invalid date '{value}'")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("warnRatio must be greater than 0 and at most 1, got {0}")]
    InvalidWarnRatio(f64),
}

/// Failures while reading or writing a roster CSV
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("roster line {line} ({employee_id}): {source}")]
    Row {
        line: u64,
        employee_id: String,
        #[source]
        source: InputError,
    },
}
