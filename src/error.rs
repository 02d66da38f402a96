//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition rejected before or around a payroll calculation.
//! The calculation rules themselves are total and never fail.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::CountryNotFound {
///     code: "XYZ".to_string(),
/// };
/// assert_eq!(error.to_string(), "Country not found: XYZ");
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

    /// An employee referenced a country code that is not configured.
    #[error("Country not found: {code}")]
    CountryNotFound {
        /// The country code that was not found.
        code: String,
    },

    /// A country definition was malformed.
    #[error("Invalid country '{code}': {message}")]
    InvalidCountry {
        /// The offending country code.
        code: String,
        /// A description of what made the country invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{name}' field '{field}': {message}")]
    InvalidEmployee {
        /// The employee's name as supplied.
        name: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A run total left the representable decimal range.
    #[error("Run total '{field}' is out of range")]
    TotalOutOfRange {
        /// The total that overflowed.
        field: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
