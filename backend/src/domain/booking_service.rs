//! Booking commands and lookups.
//!
//! The service enforces the cross-entity rules that the HTTP adapter cannot
//! check on its own: the listener (and user, when given) must exist, and the
//! amount must equal the price of the chosen session.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::listener_service::{LISTENER_NOT_FOUND, map_listener_error};
use crate::domain::ports::{
    BookingRepository, BookingRepositoryError, ListenerRepository, UserRepository,
    UserRepositoryError,
};
use crate::domain::{Booking, BookingId, BookingStatus, Error, ListenerId, NewBooking};

/// Message returned when a booking id does not resolve.
pub const BOOKING_NOT_FOUND: &str = "Booking not found";

/// Map a repository failure to an internal error naming the attempted action.
pub(crate) fn map_booking_error(
    action: &'static str,
) -> impl Fn(BookingRepositoryError) -> Error {
    move |error| Error::internal(format!("Error {action} booking: {error}"))
}

fn map_user_error(error: UserRepositoryError) -> Error {
    Error::internal(format!("Error fetching user: {error}"))
}

fn rejected(field: &str, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code,
    }))
}

/// Creates, reads and updates bookings.
#[derive(Clone)]
pub struct BookingService {
    listeners: Arc<dyn ListenerRepository>,
    bookings: Arc<dyn BookingRepository>,
    users: Arc<dyn UserRepository>,
}

impl BookingService {
    /// Create the service over its repositories.
    pub fn new(
        listeners: Arc<dyn ListenerRepository>,
        bookings: Arc<dyn BookingRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            listeners,
            bookings,
            users,
        }
    }

    /// Validate references and price, then store the booking.
    ///
    /// Nothing is stored when a check fails.
    pub async fn create(&self, booking: NewBooking) -> Result<Booking, Error> {
        let listener = self
            .listeners
            .find_by_id(booking.listener_id)
            .await
            .map_err(map_listener_error)?;
        if listener.is_none() {
            return Err(rejected(
                "listenerId",
                "unknown_listener",
                format!("listener {} does not exist", booking.listener_id),
            ));
        }

        if let Some(user_id) = booking.user_id {
            let user = self
                .users
                .find_by_id(user_id)
                .await
                .map_err(map_user_error)?;
            if user.is_none() {
                return Err(rejected(
                    "userId",
                    "unknown_user",
                    format!("user {user_id} does not exist"),
                ));
            }
        }

        let expected = booking.session_type.price();
        if booking.amount != expected {
            return Err(rejected(
                "amount",
                "amount_mismatch",
                format!(
                    "amount {} does not match the {}-minute session price of {expected}",
                    booking.amount,
                    booking.session_type.duration_minutes(),
                ),
            ));
        }

        let stored = self
            .bookings
            .create(booking)
            .await
            .map_err(map_booking_error("creating"))?;
        info!(
            booking_id = %stored.id,
            listener_id = %stored.listener_id,
            session_type = %stored.session_type,
            "booking created"
        );
        Ok(stored)
    }

    /// One booking, or a not-found error.
    pub async fn get(&self, id: BookingId) -> Result<Booking, Error> {
        self.bookings
            .find_by_id(id)
            .await
            .map_err(map_booking_error("fetching"))?
            .ok_or_else(|| Error::not_found(BOOKING_NOT_FOUND))
    }

    /// Bookings for a listener; not-found when the listener is unknown.
    pub async fn for_listener(&self, listener_id: ListenerId) -> Result<Vec<Booking>, Error> {
        let listener = self
            .listeners
            .find_by_id(listener_id)
            .await
            .map_err(map_listener_error)?;
        if listener.is_none() {
            return Err(Error::not_found(LISTENER_NOT_FOUND));
        }
        self.bookings
            .list_by_listener(listener_id)
            .await
            .map_err(map_booking_error("listing"))
    }

    /// Overwrite a booking's status. Repeating the call with the same status
    /// leaves the booking unchanged.
    pub async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, Error> {
        let updated = self
            .bookings
            .update_status(id, status)
            .await
            .map_err(map_booking_error("updating"))?
            .ok_or_else(|| Error::not_found(BOOKING_NOT_FOUND))?;
        info!(booking_id = %id, status = %status, "booking status updated");
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
