//! Contact-form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ContactMessageId;

/// A stored contact-form submission. Read-only once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Build the stored record for `draft`.
    #[must_use]
    pub fn from_draft(
        id: ContactMessageId,
        draft: NewContactMessage,
        created_at: DateTime<Utc>,
    ) -> Self {
        let NewContactMessage {
            name,
            email,
            subject,
            message,
        } = draft;
        Self {
            id,
            name,
            email,
            subject,
            message,
            created_at,
        }
    }
}

/// Reasons a contact submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessageValidationError {
    /// A required field was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Wire name of the field.
        field: &'static str,
    },
    /// The email address has no `@` with text on both sides.
    #[error("email must be a valid email address")]
    InvalidEmail,
}

impl ContactMessageValidationError {
    /// Wire name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field } => field,
            Self::InvalidEmail => "email",
        }
    }
}

/// Validated contact submission.
///
/// ## Invariants
/// - every field is non-empty once trimmed.
/// - `email` has text on both sides of an `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl NewContactMessage {
    /// Validate a submission.
    ///
    /// # Examples
    /// ```
    /// use bestie_backend::domain::NewContactMessage;
    ///
    /// assert!(NewContactMessage::try_new("Ada", "ada@example.test", "Hi", "Hello").is_ok());
    /// assert!(NewContactMessage::try_new("Ada", "ada", "Hi", "Hello").is_err());
    /// ```
    pub fn try_new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ContactMessageValidationError> {
        let name = require("name", name.into())?;
        let email = require("email", email.into())?;
        let subject = require("subject", subject.into())?;
        let message = require("message", message.into())?;
        if !looks_like_email(&email) {
            return Err(ContactMessageValidationError::InvalidEmail);
        }
        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    /// Sender name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Message body.
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn require(field: &'static str, value: String) -> Result<String, ContactMessageValidationError> {
    if value.trim().is_empty() {
        Err(ContactMessageValidationError::EmptyField { field })
    } else {
        Ok(value)
    }
}

fn looks_like_email(value: &str) -> bool {
    value
        .trim()
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}
