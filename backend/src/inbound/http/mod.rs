//! HTTP inbound adapter exposing the JSON API.
//!
//! Handlers are registered relative to the `/api` scope built by
//! [`api_scope`]; health probes live outside it.

pub mod bookings;
pub mod contact;
pub mod error;
pub mod health;
pub mod listeners;
pub mod payments;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Build the `/api` scope with every JSON endpoint registered.
///
/// `/listeners/specialty/{specialty}` is registered ahead of
/// `/listeners/{id}` so the literal segment wins.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(listeners::list_listeners)
        .service(listeners::listeners_by_specialty)
        .service(listeners::get_listener)
        .service(listeners::listener_bookings)
        .service(bookings::create_booking)
        .service(bookings::get_booking)
        .service(bookings::update_booking_status)
        .service(payments::create_payment_intent)
        .service(payments::confirm_payment)
        .service(contact::submit_contact)
        .service(contact::list_contact_messages)
}
