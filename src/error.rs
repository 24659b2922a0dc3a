//! Error types for the Severance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving employment
//! periods, calculating severance pay, and loading configuration.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of a validation failure.
///
/// Validation failures are deterministic outcomes of the supplied input.
/// They are reported to the caller in place of a result and are never
/// retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// The end date precedes the start date.
    InvalidRange,
    /// Tenure is under one year and the active policy rejects it.
    InsufficientService,
    /// A date lies outside the supported bounds.
    DateOutOfRange,
    /// The average wage is negative.
    InvalidWage,
}

/// The main error type for the Severance Engine.
///
/// # Example
///
/// ```
/// use severance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/severance.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/severance.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The end date of an employment period precedes its start date.
    #[error("End date {end_date} precedes start date {start_date}")]
    InvalidRange {
        /// The supplied start date.
        start_date: NaiveDate,
        /// The supplied end date.
        end_date: NaiveDate,
    },

    /// Tenure is shorter than one year and the policy does not prorate.
    #[error(
        "Insufficient service: {working_days} days worked, at least {minimum_days} days required"
    )]
    InsufficientService {
        /// The number of whole days worked.
        working_days: i64,
        /// The number of days required for a severance entitlement.
        minimum_days: i64,
    },

    /// A date fell outside the supported range.
    #[error("Date {date} for '{field}' is outside the supported range {min} to {max}")]
    DateOutOfRange {
        /// The name of the offending field.
        field: String,
        /// The supplied date.
        date: NaiveDate,
        /// The earliest accepted date.
        min: NaiveDate,
        /// The latest accepted date.
        max: NaiveDate,
    },

    /// The average wage was negative.
    #[error("Average wage must not be negative: {average_wage}")]
    InvalidWage {
        /// The rejected wage.
        average_wage: Decimal,
    },

    /// A calculation could not be completed, typically on arithmetic overflow.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
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

    /// Configuration parsed but holds inconsistent values.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

impl EngineError {
    /// Returns the validation kind of this error, or `None` for
    /// calculation and configuration errors.
    pub fn kind(&self) -> Option<ValidationErrorKind> {
        match self {
            EngineError::InvalidRange { .. } => Some(ValidationErrorKind::InvalidRange),
            EngineError::InsufficientService { .. } => {
                Some(ValidationErrorKind::InsufficientService)
            }
            EngineError::DateOutOfRange { .. } => Some(ValidationErrorKind::DateOutOfRange),
            EngineError::InvalidWage { .. } => Some(ValidationErrorKind::InvalidWage),
            EngineError::CalculationError { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => None,
        }
    }

    /// Returns true if this error is a validation failure of the input.
    pub fn is_validation(&self) -> bool {
        self.kind().is_some()
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
