//! Read-side service over the listener directory.

use std::sync::Arc;

use crate::domain::Error;
use crate::domain::ports::{ListenerRepository, ListenerRepositoryError};
use crate::domain::{Listener, ListenerId};

/// Message returned when a listener id does not resolve.
pub const LISTENER_NOT_FOUND: &str = "Listener not found";

pub(crate) fn map_listener_error(error: ListenerRepositoryError) -> Error {
    Error::internal(format!("Error fetching listeners: {error}"))
}

/// Listener lookups used by the HTTP adapter.
#[derive(Clone)]
pub struct ListenerQueryService {
    listeners: Arc<dyn ListenerRepository>,
}

impl ListenerQueryService {
    /// Create the service over a listener repository.
    pub fn new(listeners: Arc<dyn ListenerRepository>) -> Self {
        Self { listeners }
    }

    /// Every listener, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Listener>, Error> {
        self.listeners.list_all().await.map_err(map_listener_error)
    }

    /// Listeners tagged with `specialty`; empty when none match.
    pub async fn by_specialty(&self, specialty: &str) -> Result<Vec<Listener>, Error> {
        self.listeners
            .find_by_specialty(specialty)
            .await
            .map_err(map_listener_error)
    }

    /// One listener, or a not-found error.
    pub async fn get(&self, id: ListenerId) -> Result<Listener, Error> {
        self.listeners
            .find_by_id(id)
            .await
            .map_err(map_listener_error)?
            .ok_or_else(|| Error::not_found(LISTENER_NOT_FOUND))
    }
}
