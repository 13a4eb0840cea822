//! Backend entry-point: loads settings, seeds the store and serves the API.

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bestie_backend::inbound::http::health::HealthState;

mod server;

use server::{ServerConfig, ServerSettings, StripeSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args: Vec<OsString> = std::env::args_os().take(1).collect();
    let settings = ServerSettings::load_from_iter(args.clone())
        .map_err(|e| std::io::Error::other(format!("failed to load server settings: {e}")))?;
    let stripe = StripeSettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("failed to load payment settings: {e}")))?;
    let payments = stripe.gateway().map_err(std::io::Error::other)?;
    if payments.is_none() {
        warn!("STRIPE_SECRET_KEY not set; payment endpoints will report not configured");
    }

    let config = ServerConfig::new(settings.bind_addr()).with_payments(payments);
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    info!("server stopped");
    result
}
