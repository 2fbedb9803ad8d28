//! Error types for timeutil operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeUtilError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid unit: {0} (expected minute, hour, day or month)")]
    InvalidUnit(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Month shifts only move in the direction their name says.
    #[error("Month count must not be negative, got {0}")]
    NegativeMonths(i64),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, TimeUtilError>;
