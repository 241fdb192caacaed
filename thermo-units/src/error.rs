//! Error values for temperature operations
//!
//! Errors never crash the library. They are plain values surfaced
//! synchronously to the immediate caller; recovery is the caller's
//! responsibility and nothing is logged or retried internally.

use crate::Unit;
use thiserror::Error;

/// Error type for temperature operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemperatureError {
    /// The Kelvin-normalized value of a temperature came out negative.
    /// Reported with the value and unit that were handed to the
    /// constructor.
    #[error("Temperature {value} {unit} is below absolute zero")]
    BelowAbsoluteZero { value: f64, unit: Unit },

    /// Unit-text parsing matched none of the recognized tokens
    #[error("Unrecognized unit: {0}")]
    UnrecognizedUnit(String),

    /// Division of a delta by zero, or a ratio against a zero-magnitude
    /// delta
    #[error("Division by zero")]
    DivisionByZero,

    /// Quantity-string parsing failed before unit lookup
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
