//! Domain ports defining the edges of the hexagon.
//!
//! Storage ports are implemented by the in-memory store; the payment port by
//! the Stripe adapter. Each trait exposes a typed error so adapters map their
//! failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod booking_repository;
mod contact_message_repository;
mod listener_repository;
mod payment_gateway;
mod user_repository;

#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{BookingRepository, BookingRepositoryError};
#[cfg(test)]
pub use contact_message_repository::MockContactMessageRepository;
pub use contact_message_repository::{ContactMessageRepository, ContactMessageRepositoryError};
#[cfg(test)]
pub use listener_repository::MockListenerRepository;
pub use listener_repository::{ListenerRepository, ListenerRepositoryError};
#[cfg(test)]
pub use payment_gateway::MockPaymentGateway;
pub use payment_gateway::{
    CreatePaymentIntent, PAYMENT_CURRENCY, PaymentGateway, PaymentGatewayError, PaymentIntent,
    PaymentIntentStatus,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
