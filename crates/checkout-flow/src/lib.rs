//! Client-side booking workflow for the Borrowed Bestie API.
//!
//! A [`CheckoutFlow`] walks one booking attempt through listener selection,
//! session configuration, a staged [`BookingDraft`], booking creation, a
//! payment intent and provider confirmation. The flow talks to the outside
//! world only through three seams:
//!
//! - [`DraftStore`]: a single slot holding the serialised draft between the
//!   session picker and the payment page
//! - [`CheckoutApi`]: the booking API, implemented over HTTP by
//!   [`HttpCheckoutApi`]
//! - [`PaymentConfirmer`]: the provider's client-side confirmation
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use checkout_flow::{
//!     CheckoutConfig, CheckoutFlow, CheckoutPorts, CheckoutState, HttpCheckoutApi,
//!     PaymentConfirmer, PaymentDeclined, SessionDraftStore,
//! };
//! use url::Url;
//!
//! struct NoopConfirmer;
//!
//! #[async_trait::async_trait]
//! impl PaymentConfirmer for NoopConfirmer {
//!     async fn confirm(&self, _client_secret: &str) -> Result<(), PaymentDeclined> {
//!         Ok(())
//!     }
//! }
//!
//! let base = Url::parse("http://localhost:5000").expect("valid URL");
//! let config = CheckoutConfig::new(base.clone()).with_publishable_key("pk_test_123");
//! let api = HttpCheckoutApi::new(base, config.request_timeout()).expect("client builds");
//! let flow = CheckoutFlow::new(
//!     config,
//!     CheckoutPorts {
//!         drafts: Arc::new(SessionDraftStore::default()),
//!         api: Arc::new(api),
//!         confirmer: Arc::new(NoopConfirmer),
//!     },
//! );
//! assert_eq!(flow.state(), &CheckoutState::SelectingListener);
//! ```

mod api;
mod config;
mod confirmer;
mod draft;
mod error;
mod flow;

pub use api::{CheckoutApi, CreateBooking, HttpCheckoutApi};
pub use config::CheckoutConfig;
pub use confirmer::{PaymentConfirmer, PaymentDeclined};
pub use draft::{
    BookingDraft, DraftStore, ListenerSnapshot, SessionDraftStore, read_draft, stage_draft,
};
pub use error::{ApiError, CheckoutError, DraftError, PAYMENT_NOT_CONFIGURED_MESSAGE};
pub use flow::{CheckoutFlow, CheckoutPorts, CheckoutState, Notice, Redirect, SessionChoice, Tone};
