//! Driving port for user reads.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return all users, newest first.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return one user or a not-found error.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
