//! Error types for control operations.

use thiserror::Error;

/// Result type for control operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur in control operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a control function.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A divisor in the control law is zero.
    #[error("Division by zero: {what} is zero")]
    DivisionByZero { what: &'static str },

    /// The control law produced a non-finite signal.
    #[error("Non-finite control signal: {value}")]
    NonFinite { value: f64 },

    /// Tracker used before it was seeded.
    #[error("Controller state error: {what}")]
    StateError { what: &'static str },
}
