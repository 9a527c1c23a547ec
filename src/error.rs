//! Error types for the shift pricing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! reading input, and parsing schedule records.

use thiserror::Error;

/// The main error type for the shift pricing engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// Note that a data line failing the schedule grammar is NOT an error:
/// the input layer converts it to an error-message output row so one bad
/// line never blocks payment computation for the rest of the file.
///
/// # Example
///
/// ```
/// use shift_pricer::error::PricerError;
///
/// let error = PricerError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PricerError {
    /// Rate configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rate configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A day code was not one of the seven two-letter abbreviations.
    #[error("Unknown day code: {code}")]
    InvalidDayCode {
        /// The day code that could not be recognized.
        code: String,
    },

    /// A time token could not be parsed as HH:MM.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime {
        /// The time token that failed to parse.
        value: String,
    },

    /// A shift token was malformed or described an empty/backward interval.
    #[error("Invalid shift '{token}': {message}")]
    InvalidShift {
        /// The shift token that was invalid.
        token: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A worker record line was structurally malformed.
    #[error("Invalid record: {message}")]
    InvalidRecord {
        /// A description of what made the record invalid.
        message: String,
    },

    /// An I/O error occurred while reading input data.
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return PricerError.
pub type PricerResult<T> = Result<T, PricerError>;
