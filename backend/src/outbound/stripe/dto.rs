//! DTOs for decoding Stripe payment intent responses.
//!
//! Only the fields this service reads are declared; everything else in the
//! provider payload is ignored.

use std::collections::BTreeMap;

use serde::Deserialize;
use session_pricing::Money;

use crate::domain::ports::{PaymentIntent, PaymentIntentStatus};

const BOOKING_METADATA_KEY: &str = "bookingId";

#[derive(Debug, Deserialize)]
pub(super) struct PaymentIntentDto {
    pub(super) id: String,
    pub(super) client_secret: Option<String>,
    pub(super) amount: u64,
    pub(super) status: String,
    #[serde(default)]
    pub(super) metadata: BTreeMap<String, String>,
}

impl PaymentIntentDto {
    pub(super) fn into_domain(mut self) -> PaymentIntent {
        PaymentIntent {
            status: PaymentIntentStatus::from_provider(&self.status),
            booking_metadata: self
                .metadata
                .remove(BOOKING_METADATA_KEY)
                .unwrap_or_default(),
            id: self.id,
            client_secret: self.client_secret,
            amount: Money::from_cents(self.amount),
        }
    }
}

/// Error envelope, e.g. `{"error":{"message":"No such payment_intent"}}`.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelopeDto {
    pub(super) error: ErrorDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorDto {
    pub(super) message: Option<String>,
}

/// Key used for the booking reference in form-encoded metadata.
pub(super) fn booking_metadata_field() -> String {
    format!("metadata[{BOOKING_METADATA_KEY}]")
}
