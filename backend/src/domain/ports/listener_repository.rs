//! Port for listener storage.

use async_trait::async_trait;

use crate::domain::{Listener, ListenerId, NewListener};

use super::define_port_error;

define_port_error! {
    /// Errors raised by listener repository adapters.
    pub enum ListenerRepositoryError {
        /// The backing store failed.
        Storage { message: String } => "listener repository failed: {message}",
    }
}

/// Storage contract for [`Listener`] records.
///
/// Listings are returned in insertion order. Absence is reported as
/// `Ok(None)`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListenerRepository: Send + Sync {
    /// Every listener, in the order they were created.
    async fn list_all(&self) -> Result<Vec<Listener>, ListenerRepositoryError>;

    /// Look up one listener.
    async fn find_by_id(&self, id: ListenerId)
    -> Result<Option<Listener>, ListenerRepositoryError>;

    /// Listeners whose specialties contain `specialty` exactly
    /// (case-sensitive).
    async fn find_by_specialty(
        &self,
        specialty: &str,
    ) -> Result<Vec<Listener>, ListenerRepositoryError>;

    /// Store a new listener under the next id, applying defaults.
    async fn create(&self, listener: NewListener) -> Result<Listener, ListenerRepositoryError>;
}
