//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so the
//! app builder and the fake payment provider live here rather than being
//! copied into each test file.

pub mod fake_stripe;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use actix_web::{App, web};
use bestie_backend::Trace;
use bestie_backend::domain::ports::PaymentGateway;
use bestie_backend::inbound::http::api_scope;
use bestie_backend::inbound::http::error::{json_config, unmatched_route};
use bestie_backend::inbound::http::state::{HttpState, HttpStatePorts};
use bestie_backend::outbound::memory::InMemoryStore;
use mockable::DefaultClock;
use serde_json::Value;

/// Build the production middleware and route stack over a seeded store.
pub fn seeded_app(
    payments: Option<Arc<dyn PaymentGateway>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let store = Arc::new(InMemoryStore::seeded(Arc::new(DefaultClock)));
    let state = HttpState::new(HttpStatePorts {
        listeners: store.clone(),
        bookings: store.clone(),
        contact_messages: store.clone(),
        users: store,
        payments,
    });
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .wrap(Trace)
        .service(api_scope())
        .default_service(web::to(unmatched_route))
}

/// Send `request` and decode the JSON body.
pub async fn call_json<S, B>(app: &S, request: actix_test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("response body should be JSON");
    (status, value)
}
