//! Error types for the shift compliance engine.
//!
//! Record-level variants are collected during the build phase and never abort
//! a run. Configuration variants are returned from loading and validation.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the shift compliance engine.
///
/// # Example
///
/// ```
/// use shift_compliance::error::AnalysisError;
///
/// let error = AnalysisError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A row lacks a usable employee id.
    #[error("Malformed record at row {row}: {message}")]
    MalformedRecord {
        /// Position of the row in the input sequence.
        row: usize,
        /// A description of what made the row unusable.
        message: String,
    },

    /// A row names an employee but does not carry both shift instants.
    #[error("Record at row {row} for employee '{employee_id}' has no complete shift times")]
    MissingShiftFields {
        /// Position of the row in the input sequence.
        row: usize,
        /// The employee the row belongs to.
        employee_id: String,
    },

    /// A row whose start instant is after its end instant.
    #[error("Record at row {row} for employee '{employee_id}' ends before it starts ({start} > {end})")]
    InvertedInterval {
        /// Position of the row in the input sequence.
        row: usize,
        /// The employee the row belongs to.
        employee_id: String,
        /// The recorded start instant.
        start: NaiveDateTime,
        /// The recorded end instant.
        end: NaiveDateTime,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field, in `section.field` form.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },
}

/// A type alias for Results that return AnalysisError.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
