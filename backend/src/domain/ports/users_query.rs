//! Driving port for user-facing queries.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for listing and fetching users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// All known users.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// A single user, or a `not_found` error.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
