//! Port for the external payment provider.
//!
//! Adapters perform one call per operation with no retries. Whether a provider
//! is configured at all is decided by the caller, which holds an
//! `Option<Arc<dyn PaymentGateway>>`.

use async_trait::async_trait;
use session_pricing::Money;

use crate::domain::BookingId;

use super::define_port_error;

/// Currency every intent is created in.
pub const PAYMENT_CURRENCY: &str = "usd";

define_port_error! {
    /// Errors raised by payment gateway adapters.
    pub enum PaymentGatewayError {
        /// The provider could not be reached.
        Transport { message: String } => "{message}",
        /// The provider did not answer within the client timeout.
        Timeout { message: String } => "{message}",
        /// The provider refused the request (bad key, unknown intent, card error).
        Rejected { message: String } => "{message}",
        /// The provider answered with a body that could not be decoded.
        Decode { message: String } => "{message}",
    }
}

/// Parameters for creating a payment intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePaymentIntent {
    /// Charge amount in minor units.
    pub amount: Money,
    /// ISO currency code, lower case.
    pub currency: String,
    /// Booking the charge pays for; sent as `metadata.bookingId`, empty when
    /// absent.
    pub booking_id: Option<BookingId>,
}

impl CreatePaymentIntent {
    /// Build a request in the service currency.
    #[must_use]
    pub fn new(amount: Money, booking_id: Option<BookingId>) -> Self {
        Self {
            amount,
            currency: PAYMENT_CURRENCY.to_owned(),
            booking_id,
        }
    }

    /// Metadata value carried with the intent.
    #[must_use]
    pub fn booking_metadata(&self) -> String {
        self.booking_id.map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Lifecycle status reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentIntentStatus {
    Succeeded,
    Processing,
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    RequiresCapture,
    Canceled,
    /// A status this service does not know about.
    Other(String),
}

impl PaymentIntentStatus {
    /// Map the provider's status string.
    #[must_use]
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "succeeded" => Self::Succeeded,
            "processing" => Self::Processing,
            "requires_payment_method" => Self::RequiresPaymentMethod,
            "requires_confirmation" => Self::RequiresConfirmation,
            "requires_action" => Self::RequiresAction,
            "requires_capture" => Self::RequiresCapture,
            "canceled" => Self::Canceled,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// A payment intent as seen by this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    /// Provider identifier, e.g. `pi_123`.
    pub id: String,
    /// Secret the client uses to confirm the payment.
    pub client_secret: Option<String>,
    /// Amount in minor units.
    pub amount: Money,
    pub status: PaymentIntentStatus,
    /// Raw `metadata.bookingId` value; empty when the intent was created
    /// without a booking.
    pub booking_metadata: String,
}

impl PaymentIntent {
    /// Booking referenced by the intent metadata. Values that are empty or
    /// not a positive integer reference no booking.
    #[must_use]
    pub fn booking_id(&self) -> Option<BookingId> {
        self.booking_metadata
            .parse::<BookingId>()
            .ok()
            .filter(|id| id.get() > 0)
    }
}

/// Driven port for the payment provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent.
    async fn create_intent(
        &self,
        request: CreatePaymentIntent,
    ) -> Result<PaymentIntent, PaymentGatewayError>;

    /// Retrieve a payment intent by provider id.
    async fn retrieve_intent(&self, id: &str) -> Result<PaymentIntent, PaymentGatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn intent(metadata: &str) -> PaymentIntent {
        PaymentIntent {
            id: "pi_1".to_owned(),
            client_secret: None,
            amount: Money::from_cents(2500),
            status: PaymentIntentStatus::Succeeded,
            booking_metadata: metadata.to_owned(),
        }
    }

    #[rstest]
    #[case("7", Some(BookingId::new(7)))]
    #[case("", None)]
    #[case("0", None)]
    #[case("abc", None)]
    fn metadata_resolves_booking(#[case] raw: &str, #[case] expected: Option<BookingId>) {
        assert_eq!(intent(raw).booking_id(), expected);
    }

    #[test]
    fn metadata_is_empty_without_booking() {
        let request = CreatePaymentIntent::new(Money::from_cents(2500), None);
        assert_eq!(request.booking_metadata(), "");
        assert_eq!(request.currency, "usd");
        let linked = CreatePaymentIntent::new(Money::from_cents(2500), Some(BookingId::new(3)));
        assert_eq!(linked.booking_metadata(), "3");
    }

    #[rstest]
    #[case("succeeded", PaymentIntentStatus::Succeeded)]
    #[case("requires_payment_method", PaymentIntentStatus::RequiresPaymentMethod)]
    #[case("canceled", PaymentIntentStatus::Canceled)]
    #[case("mystery", PaymentIntentStatus::Other("mystery".to_owned()))]
    fn maps_provider_statuses(#[case] raw: &str, #[case] expected: PaymentIntentStatus) {
        assert_eq!(PaymentIntentStatus::from_provider(raw), expected);
    }
}
