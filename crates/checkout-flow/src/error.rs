//! Error types for the checkout-flow crate.

use thiserror::Error;

/// Message shown when payments cannot be taken at all.
pub const PAYMENT_NOT_CONFIGURED_MESSAGE: &str =
    "Payment processing is not configured. Please contact support.";

/// Failures talking to the booking API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server reported that no payment provider is configured.
    #[error("{message}")]
    PaymentNotConfigured {
        /// Server-supplied explanation.
        message: String,
    },
    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, or a placeholder when the body had none.
        message: String,
    },
    /// The request never produced a response.
    #[error("request failed: {message}")]
    Transport {
        /// Transport error description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("unexpected response: {message}")]
    Decode {
        /// Decoder error description.
        message: String,
    },
}

impl ApiError {
    /// Whether this failure means payments are disabled server-side.
    #[must_use]
    pub const fn is_not_configured(&self) -> bool {
        matches!(self, Self::PaymentNotConfigured { .. })
    }
}

/// Failures reading or writing the staged draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The stored draft is not valid JSON for a [`crate::BookingDraft`].
    #[error("staged draft is unreadable: {message}")]
    Corrupt {
        /// Decoder error description.
        message: String,
    },
    /// The draft could not be serialised.
    #[error("draft could not be serialised: {message}")]
    Encode {
        /// Encoder error description.
        message: String,
    },
}

/// Errors raised by [`crate::CheckoutFlow`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The event is not valid in the current state.
    #[error("cannot {event} while {state}")]
    InvalidTransition {
        /// Name of the rejected event.
        event: &'static str,
        /// Name of the state the flow was in.
        state: &'static str,
    },
    /// Hand-off was requested but no scheduling page is configured.
    #[error("no external scheduling link is configured")]
    NoSchedulingLink,
    /// Draft storage failed.
    #[error(transparent)]
    Draft(#[from] DraftError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_names_event_and_state() {
        let err = CheckoutError::InvalidTransition {
            event: "submit payment",
            state: "selecting listener",
        };
        assert_eq!(err.to_string(), "cannot submit payment while selecting listener");
    }

    #[test]
    fn only_not_configured_is_classified_as_configuration() {
        let configured = ApiError::PaymentNotConfigured {
            message: PAYMENT_NOT_CONFIGURED_MESSAGE.to_owned(),
        };
        let other = ApiError::Status {
            status: 500,
            message: "Error creating payment intent: boom".to_owned(),
        };
        assert!(configured.is_not_configured());
        assert!(!other.is_not_configured());
    }
}
