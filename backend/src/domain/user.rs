//! Visitor accounts referenced by bookings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::UserId;

/// A registered visitor.
///
/// ## Invariants
/// - `username` and `email` are unique across all users.
/// - `password` never leaves the process; it is skipped during
///   serialisation and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build the stored record for `draft`.
    #[must_use]
    pub fn from_draft(id: UserId, draft: NewUser, created_at: DateTime<Utc>) -> Self {
        let NewUser {
            username,
            email,
            password,
        } = draft;
        Self {
            id,
            username,
            email,
            password,
            created_at,
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// User fields supplied at creation time.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
