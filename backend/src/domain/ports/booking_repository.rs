//! Port for booking storage.
//!
//! The two update operations follow a last-writer-wins contract: there is no
//! revision check, and an unknown id yields `Ok(None)` so callers can turn it
//! into a not-found response.

use async_trait::async_trait;

use crate::domain::{Booking, BookingId, BookingStatus, ListenerId, NewBooking, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// The backing store failed.
        Storage { message: String } => "booking repository failed: {message}",
    }
}

/// Storage contract for [`Booking`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Store a new booking under the next id, stamping `createdAt` and
    /// defaulting the status to pending.
    async fn create(&self, booking: NewBooking) -> Result<Booking, BookingRepositoryError>;

    /// Look up one booking.
    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingRepositoryError>;

    /// Bookings made by `user_id`, in creation order.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Bookings with `listener_id`, in creation order.
    async fn list_by_listener(
        &self,
        listener_id: ListenerId,
    ) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Overwrite the status of a booking.
    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, BookingRepositoryError>;

    /// Record the payment intent created for a booking.
    async fn attach_payment_intent(
        &self,
        id: BookingId,
        payment_intent_id: String,
    ) -> Result<Option<Booking>, BookingRepositoryError>;
}
