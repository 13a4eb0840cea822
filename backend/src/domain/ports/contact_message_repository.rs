//! Port for contact-form storage.

use async_trait::async_trait;

use crate::domain::{ContactMessage, NewContactMessage};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact message repository adapters.
    pub enum ContactMessageRepositoryError {
        /// The backing store failed.
        Storage { message: String } => "contact message repository failed: {message}",
    }
}

/// Storage contract for [`ContactMessage`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Store a validated submission under the next id.
    async fn create(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;

    /// Every submission, in the order received.
    async fn list_all(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;
}
