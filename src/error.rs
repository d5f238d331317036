//! Error types for the Timesheet Reconstruction Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around timesheet reconstruction.
//!
//! Missing punch roles and inconsistent punch timestamps are NOT errors:
//! the engine degrades to zeroed metrics or propagates negative durations
//! so downstream validation can see them.

use thiserror::Error;

/// The main error type for the Timesheet Reconstruction Engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/shifts.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Shift catalog file not found: /missing/shifts.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Shift catalog file was not found at the specified path.
    #[error("Shift catalog file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Shift catalog file could not be parsed.
    #[error("Failed to parse shift catalog '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Shift code was not found in the catalog.
    #[error("Shift not found: {code}")]
    ShiftNotFound {
        /// The shift code that was not found.
        code: String,
    },

    /// A report period was malformed (end date before start date).
    #[error("Invalid report period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
