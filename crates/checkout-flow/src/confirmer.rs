//! Provider-side payment confirmation.

use async_trait::async_trait;
use thiserror::Error;

/// The provider refused the payment; the message is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PaymentDeclined {
    /// Provider explanation, e.g. "Your card was declined."
    pub message: String,
}

/// Confirms a payment intent with the provider's client SDK.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentConfirmer: Send + Sync {
    /// Confirm the intent identified by `client_secret`.
    async fn confirm(&self, client_secret: &str) -> Result<(), PaymentDeclined>;
}
