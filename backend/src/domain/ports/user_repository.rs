//! Port for user storage and its errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Another user already holds the username.
        DuplicateUsername { username: String } => "username '{username}' is already taken",
        /// Another user already holds the email address.
        DuplicateEmail { email: String } => "email '{email}' is already registered",
        /// The backing store failed.
        Storage { message: String } => "user repository failed: {message}",
    }
}

/// Storage contract for [`User`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Look up a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Look up a user by exact email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Store a new user, rejecting a username or email that is already in use.
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;
}
