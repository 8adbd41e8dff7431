//! Error types for the Jornada Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating input,
//! loading configuration, or calculating a workday.

use thiserror::Error;

/// The main error type for the Jornada Engine.
///
/// Every error is an input or configuration validation error. None are
/// transient, so callers should surface them directly to the user.
///
/// # Example
///
/// ```
/// use jornada_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     input: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid clock time '25:00': expected HH:MM or HH:MM:SS");
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

    /// Configuration parsed but holds a value that breaks a legal invariant.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration field at fault.
        field: String,
        /// What is wrong with the value.
        message: String,
    },

    /// A clock time could not be parsed.
    #[error("Invalid clock time '{input}': expected HH:MM or HH:MM:SS")]
    InvalidTimeFormat {
        /// The raw input that failed to parse.
        input: String,
    },

    /// The break does not satisfy the intrajornada rules for the workday.
    #[error(
        "Invalid break of {break_minutes} minutes for a {work_minutes}-minute workday: {reason}"
    )]
    InvalidBreakDuration {
        /// The requested break, in minutes.
        break_minutes: u32,
        /// The target work duration, in minutes.
        work_minutes: u32,
        /// Which rule the break violates.
        reason: String,
    },

    /// The target work duration is zero or above the daily cap.
    #[error("Invalid work duration of {work_minutes} minutes: {message}")]
    InvalidWorkDuration {
        /// The requested work duration, in minutes.
        work_minutes: u32,
        /// Why the duration was rejected.
        message: String,
    },

    /// A weekly regime selector could not be recognised.
    #[error("Invalid regime '{input}': expected 5 or 6 working days per week")]
    InvalidRegime {
        /// The raw selector.
        input: String,
    },

    /// The logging subscriber could not be installed.
    #[error("Failed to initialise logging: {message}")]
    LoggingInit {
        /// Why initialisation failed.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
