//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every handler under `/api` plus the health probes
//! - **Schemas**: domain type wrappers from
//!   [`schemas`](crate::inbound::http::schemas) that describe the wire shape
//!   without coupling domain types to utoipa, and the request/response DTOs
//!   declared next to their handlers
//!
//! The generated specification is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::bookings::{CreateBookingRequest, UpdateBookingStatusRequest};
use crate::inbound::http::contact::ContactRequest;
use crate::inbound::http::payments::{
    ConfirmPaymentRequest, ConfirmPaymentResponse, CreatePaymentIntentRequest,
    CreatePaymentIntentResponse,
};
use crate::inbound::http::schemas::{
    BookingSchema, BookingStatusSchema, ContactMessageSchema, ErrorCodeSchema, ErrorSchema,
    ListenerSchema, SessionTypeSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Borrowed Bestie API",
        description = "Listener directory, session bookings, contact messages and payments.",
        license(name = "MIT", url = "https://opensource.org/license/mit")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::listeners::list_listeners,
        crate::inbound::http::listeners::listeners_by_specialty,
        crate::inbound::http::listeners::get_listener,
        crate::inbound::http::listeners::listener_bookings,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::get_booking,
        crate::inbound::http::bookings::update_booking_status,
        crate::inbound::http::payments::create_payment_intent,
        crate::inbound::http::payments::confirm_payment,
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::contact::list_contact_messages,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ListenerSchema,
        SessionTypeSchema,
        BookingSchema,
        BookingStatusSchema,
        ContactMessageSchema,
        CreateBookingRequest,
        UpdateBookingStatusRequest,
        ContactRequest,
        CreatePaymentIntentRequest,
        CreatePaymentIntentResponse,
        ConfirmPaymentRequest,
        ConfirmPaymentResponse,
    )),
    tags(
        (name = "listeners", description = "Listener directory"),
        (name = "bookings", description = "Session bookings"),
        (name = "payments", description = "Payment intents and confirmation"),
        (name = "contact", description = "Contact form submissions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
