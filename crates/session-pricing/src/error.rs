//! Error types for the session-pricing crate.

use thiserror::Error;

/// Errors raised while parsing or converting money amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The decimal string is not of the form `123` or `123.45`.
    #[error("amount '{value}' is not a decimal with at most two fractional digits")]
    Malformed {
        /// The rejected input.
        value: String,
    },
    /// The amount is NaN or infinite.
    #[error("amount must be a finite number")]
    NotFinite,
    /// The amount is zero or negative.
    #[error("amount must be greater than zero")]
    NotPositive,
    /// The amount does not fit in minor units.
    #[error("amount is too large")]
    OutOfRange,
}

/// Error raised when a session type string is not one of the priced lengths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("session type '{value}' must be one of 15, 30 or 60")]
pub struct SessionTypeError {
    /// The rejected input.
    pub value: String,
}
