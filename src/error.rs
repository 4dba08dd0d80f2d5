//! Error types for the Attendance Compliance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during compliance checking.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance Compliance Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Errors fall
/// into three kinds: validation (a request violates a precondition),
/// storage (attendance data cannot be read or written), and configuration
/// (the engine cannot be constructed from the supplied configuration).
/// All three are fatal to the current operation; nothing is retried.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Configuration parsed but contained invalid values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// No reporting period covers the requested date.
    #[error("No reporting period defined for date {date}")]
    PeriodNotFound {
        /// The date that no period covers.
        date: NaiveDate,
    },

    /// A date range query was made with start after end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// The start of the rejected range.
        start: NaiveDate,
        /// The end of the rejected range.
        end: NaiveDate,
    },

    /// A persisted attendance status was outside the closed two-value set.
    #[error("Invalid attendance status: '{value}'. Must be one of: in-office, remote")]
    InvalidStatus {
        /// The status value that was rejected.
        value: String,
    },

    /// The attendance store could not read or write records.
    #[error("Storage error in '{path}': {message}")]
    Storage {
        /// The file the store was operating on.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
