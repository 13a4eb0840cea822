//! Payment intent creation and confirmation.
//!
//! The gateway is optional. When the process starts without provider
//! credentials every operation fails with `payment_not_configured` before any
//! input is inspected, so clients always see the same message.

use std::sync::Arc;

use serde_json::json;
use session_pricing::Money;
use tracing::{info, warn};

use crate::domain::booking_service::{BOOKING_NOT_FOUND, map_booking_error};
use crate::domain::ports::{
    BookingRepository, CreatePaymentIntent, PaymentGateway, PaymentIntentStatus,
};
use crate::domain::{BookingId, BookingStatus, Error};

/// Message returned when the provider reports a status other than succeeded.
pub const PAYMENT_NOT_SUCCESSFUL: &str = "Payment not successful";

/// Creates and confirms payment intents and keeps bookings in step.
#[derive(Clone)]
pub struct PaymentService {
    gateway: Option<Arc<dyn PaymentGateway>>,
    bookings: Arc<dyn BookingRepository>,
}

impl PaymentService {
    /// Create the service. Pass `None` when no provider is configured.
    pub fn new(
        gateway: Option<Arc<dyn PaymentGateway>>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self { gateway, bookings }
    }

    /// Whether a payment provider is available.
    pub fn is_configured(&self) -> bool {
        self.gateway.is_some()
    }

    /// Fail with `payment_not_configured` when no provider is available.
    ///
    /// Handlers call this before inspecting the request body so every payment
    /// call reports the same configuration error.
    pub fn ensure_configured(&self) -> Result<(), Error> {
        self.gateway().map(|_| ())
    }

    fn gateway(&self) -> Result<&Arc<dyn PaymentGateway>, Error> {
        self.gateway.as_ref().ok_or_else(Error::payment_not_configured)
    }

    /// Create an intent for `amount` major units and return its client secret.
    ///
    /// When `booking_id` is given the booking must exist and its amount must
    /// equal the requested amount; the new intent id is then recorded on it.
    pub async fn create_intent(
        &self,
        amount: f64,
        booking_id: Option<BookingId>,
    ) -> Result<String, Error> {
        let gateway = self.gateway()?;
        let amount = Money::from_major_units(amount).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({
                "field": "amount",
                "code": "invalid_amount",
            }))
        })?;

        if let Some(id) = booking_id {
            let booking = self
                .bookings
                .find_by_id(id)
                .await
                .map_err(map_booking_error("fetching"))?
                .ok_or_else(|| Error::not_found(BOOKING_NOT_FOUND))?;
            if booking.amount != amount {
                return Err(Error::invalid_request(format!(
                    "amount {amount} does not match booking amount {}",
                    booking.amount
                ))
                .with_details(json!({
                    "field": "amount",
                    "code": "amount_mismatch",
                })));
            }
        }

        let intent = gateway
            .create_intent(CreatePaymentIntent::new(amount, booking_id))
            .await
            .map_err(|err| Error::payment_provider(format!("Error creating payment intent: {err}")))?;
        info!(
            payment_intent_id = %intent.id,
            amount_cents = amount.cents(),
            booking_id = ?booking_id.map(BookingId::get),
            "payment intent created"
        );

        if let Some(id) = booking_id {
            let attached = self
                .bookings
                .attach_payment_intent(id, intent.id.clone())
                .await
                .map_err(map_booking_error("updating"))?;
            if attached.is_none() {
                warn!(booking_id = %id, "booking vanished before intent was attached");
            }
        }

        intent.client_secret.ok_or_else(|| {
            Error::payment_provider(
                "Error creating payment intent: provider returned no client secret",
            )
        })
    }

    /// Check a payment intent and confirm the booking it pays for.
    ///
    /// Any status other than succeeded is rejected. A booking named in the
    /// intent metadata that no longer exists is logged and otherwise ignored.
    pub async fn confirm(&self, payment_intent_id: &str) -> Result<(), Error> {
        let gateway = self.gateway()?;
        let intent = gateway
            .retrieve_intent(payment_intent_id)
            .await
            .map_err(|err| Error::payment_provider(format!("Error confirming payment: {err}")))?;

        if intent.status != PaymentIntentStatus::Succeeded {
            info!(payment_intent_id, status = ?intent.status, "payment not successful");
            return Err(Error::invalid_request(PAYMENT_NOT_SUCCESSFUL));
        }

        if let Some(id) = intent.booking_id() {
            let updated = self
                .bookings
                .update_status(id, BookingStatus::Confirmed)
                .await
                .map_err(map_booking_error("updating"))?;
            match updated {
                Some(_) => info!(booking_id = %id, payment_intent_id, "booking confirmed"),
                None => warn!(booking_id = %id, payment_intent_id, "paid booking not found"),
            }
        }
        Ok(())
    }
}
