//! Server settings loaded via OrthoConfig and the configuration object handed
//! to [`create_server`](super::create_server).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use bestie_backend::domain::ports::PaymentGateway;
use bestie_backend::outbound::stripe::{DEFAULT_STRIPE_API_BASE, StripeGateway};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STRIPE_TIMEOUT_SECS: u64 = 30;

/// Listener address settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BESTIE")]
pub struct ServerSettings {
    /// Interface to bind; defaults to all interfaces.
    #[ortho_config(default = DEFAULT_HOST)]
    pub host: IpAddr,
    /// TCP port to bind; defaults to 5000.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerSettings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Payment provider settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STRIPE")]
pub struct StripeSettings {
    /// Secret API key. Payments are disabled when absent or blank.
    pub secret_key: Option<String>,
    /// Provider base URL, overridden to point at a fake in tests.
    #[ortho_config(default = DEFAULT_STRIPE_API_BASE.to_owned())]
    pub api_base: String,
    /// Per-request timeout in seconds.
    #[ortho_config(default = DEFAULT_STRIPE_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Failure to turn [`StripeSettings`] into a gateway.
#[derive(Debug, thiserror::Error)]
pub enum StripeSettingsError {
    #[error("invalid STRIPE_API_BASE {value:?}: {source}")]
    InvalidBase {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build payment HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl StripeSettings {
    fn secret_key(&self) -> Option<&str> {
        self.secret_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the payment gateway, or `None` when no secret key is set.
    ///
    /// # Errors
    /// Returns [`StripeSettingsError`] when the base URL does not parse or the
    /// HTTP client cannot be constructed.
    pub fn gateway(&self) -> Result<Option<Arc<dyn PaymentGateway>>, StripeSettingsError> {
        let Some(secret_key) = self.secret_key() else {
            return Ok(None);
        };
        let base = Url::parse(&self.api_base).map_err(|source| StripeSettingsError::InvalidBase {
            value: self.api_base.clone(),
            source,
        })?;
        let gateway = StripeGateway::new(base, secret_key, self.timeout())?;
        Ok(Some(Arc::new(gateway)))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) payments: Option<Arc<dyn PaymentGateway>>,
}

impl ServerConfig {
    /// Construct a server configuration with payments disabled.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            payments: None,
        }
    }

    /// Attach the payment gateway, if one was configured.
    #[must_use]
    pub fn with_payments(mut self, payments: Option<Arc<dyn PaymentGateway>>) -> Self {
        self.payments = payments;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by bootstrap tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
