//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BookingRepository, ContactMessageRepository, ListenerRepository, PaymentGateway,
    UserRepository,
};
use crate::domain::{BookingService, ContactService, ListenerQueryService, PaymentService};

/// Parameter object bundling the port implementations behind the services.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub listeners: Arc<dyn ListenerRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub contact_messages: Arc<dyn ContactMessageRepository>,
    pub users: Arc<dyn UserRepository>,
    /// `None` when no payment provider credential was configured.
    pub payments: Option<Arc<dyn PaymentGateway>>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub listeners: ListenerQueryService,
    pub bookings: BookingService,
    pub contact: ContactService,
    pub payments: PaymentService,
}

impl HttpState {
    /// Wire the domain services over a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bestie_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use bestie_backend::outbound::memory::InMemoryStore;
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(InMemoryStore::seeded(Arc::new(DefaultClock)));
    /// let state = HttpState::new(HttpStatePorts {
    ///     listeners: store.clone(),
    ///     bookings: store.clone(),
    ///     contact_messages: store.clone(),
    ///     users: store,
    ///     payments: None,
    /// });
    /// assert!(!state.payments.is_configured());
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            listeners,
            bookings,
            contact_messages,
            users,
            payments,
        } = ports;
        Self {
            listeners: ListenerQueryService::new(listeners.clone()),
            bookings: BookingService::new(listeners, bookings.clone(), users),
            contact: ContactService::new(contact_messages),
            payments: PaymentService::new(payments, bookings),
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
