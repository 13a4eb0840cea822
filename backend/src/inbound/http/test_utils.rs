//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::DefaultClock;

use crate::domain::ports::PaymentGateway;
use crate::inbound::http::api_scope;
use crate::inbound::http::error::{json_config, unmatched_route};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::InMemoryStore;

/// Build handler state over a freshly seeded in-memory store.
///
/// - Every call gets its own store, so tests never share bookings.
/// - `payments` of `None` mimics a server started without a Stripe key.
pub fn seeded_state(payments: Option<Arc<dyn PaymentGateway>>) -> HttpState {
    let store = Arc::new(InMemoryStore::seeded(Arc::new(DefaultClock)));
    HttpState::new(HttpStatePorts {
        listeners: store.clone(),
        bookings: store.clone(),
        contact_messages: store.clone(),
        users: store,
        payments,
    })
}

/// Build an app exposing the `/api` scope the same way the server does.
pub fn api_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .service(api_scope())
        .default_service(web::to(unmatched_route))
}
