//! Contact-form submissions.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{ContactMessageRepository, ContactMessageRepositoryError};
use crate::domain::{ContactMessage, Error, NewContactMessage};

fn map_repository_error(error: ContactMessageRepositoryError) -> Error {
    Error::internal(format!("Error submitting message: {error}"))
}

/// Stores and lists contact messages.
#[derive(Clone)]
pub struct ContactService {
    messages: Arc<dyn ContactMessageRepository>,
}

impl ContactService {
    /// Create the service over a contact message repository.
    pub fn new(messages: Arc<dyn ContactMessageRepository>) -> Self {
        Self { messages }
    }

    /// Store a validated submission.
    pub async fn submit(&self, message: NewContactMessage) -> Result<ContactMessage, Error> {
        let stored = self
            .messages
            .create(message)
            .await
            .map_err(map_repository_error)?;
        info!(contact_message_id = %stored.id, "contact message received");
        Ok(stored)
    }

    /// Every submission, oldest first.
    pub async fn list_all(&self) -> Result<Vec<ContactMessage>, Error> {
        self.messages.list_all().await.map_err(map_repository_error)
    }
}
