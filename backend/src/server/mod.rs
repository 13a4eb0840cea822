//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings, StripeSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use bestie_backend::Trace;
#[cfg(debug_assertions)]
use bestie_backend::doc::ApiDoc;
use bestie_backend::inbound::http::api_scope;
use bestie_backend::inbound::http::error::{json_config, unmatched_route};
use bestie_backend::inbound::http::health::{HealthState, live, ready};
use bestie_backend::inbound::http::state::{HttpState, HttpStatePorts};
use bestie_backend::outbound::memory::InMemoryStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the domain services over a freshly seeded in-memory store.
fn build_http_state(config: &ServerConfig) -> HttpState {
    let store = Arc::new(InMemoryStore::seeded(Arc::new(DefaultClock)));
    HttpState::new(HttpStatePorts {
        listeners: store.clone(),
        bookings: store.clone(),
        contact_messages: store.clone(),
        users: store,
        payments: config.payments.clone(),
    })
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(unmatched_route))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The store is seeded before the socket is bound, so readiness is only
/// signalled once listeners are available.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let payments_enabled = http_state.payments.is_configured();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?;

    for addr in server.addrs() {
        info!(%addr, payments_enabled, "listening");
    }

    let server = server.run();
    health_state.mark_ready();
    Ok(server)
}
