//! Stripe outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `PaymentGateway`
//! port.

mod dto;
mod http_gateway;

pub use http_gateway::{DEFAULT_STRIPE_API_BASE, StripeGateway};
