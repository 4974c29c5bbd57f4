//! Port abstraction for user persistence adapters and their errors.
//!
//! The repository is the only reader and writer of stored users. Adapters
//! report "no such row" through `Option`/`bool` return values and reserve
//! errors for storage failures and uniqueness conflicts, so callers branch on
//! explicit values instead of inspecting driver-specific failures.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds this email address.
        DuplicateEmail { email: String } => "a user with email {email} already exists",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every user, newest `created_at` first, ties broken by
    /// descending id.
    async fn list_newest_first(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user; storage assigns `id` and `created_at`.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Replace name, email and age of an existing user.
    ///
    /// Returns `false` when no user matched `id`.
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<bool, UserPersistenceError>;

    /// Hard-delete a user.
    ///
    /// Returns `false` when no user matched `id`.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
