//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{CreatedUser, Error, UserDraft, UserId};

/// Domain use-case port for creating, replacing and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a new user and return the normalised echo of what was sent.
    async fn create_user(&self, draft: UserDraft) -> Result<CreatedUser, Error>;

    /// Replace name, email and age of an existing user.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<(), Error>;

    /// Remove a user permanently.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
