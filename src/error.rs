//! Error types
//!
//! Calculators return `CalcError` when an input would otherwise push
//! `NaN`/`Infinity` to callers. Region lookups return `DataError`.

use thiserror::Error;

/// Single user-facing message for any regional data lookup failure.
pub const CONNECTIVITY_ERROR_MESSAGE: &str = "Failed to connect to regional data streams.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Data unavailable for region ID: {0}")]
    RegionUnavailable(String),

    #[error("Invalid region data: {0}")]
    Invalid(String),
}

impl DataError {
    /// Message shown to dashboard users, regardless of the underlying cause.
    pub fn user_message(&self) -> &'static str {
        CONNECTIVITY_ERROR_MESSAGE
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
pub type DataResult<T> = Result<T, DataError>;
