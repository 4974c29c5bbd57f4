//! User domain service.
//!
//! Implements the [`UsersQuery`] and [`UsersCommand`] driving ports on top of
//! a [`UserRepository`]. Storage failures are logged here with full detail and
//! surfaced to callers as fixed, client-safe messages.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{CreatedUser, Error, User, UserDraft, UserId};

const USER_NOT_FOUND: &str = "User not found";
const EMAIL_EXISTS: &str = "Email already exists";

#[derive(Debug, Clone, Copy)]
enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    const fn name(self) -> &'static str {
        match self {
            Self::List => "list_users",
            Self::Get => "get_user",
            Self::Create => "create_user",
            Self::Update => "update_user",
            Self::Delete => "delete_user",
        }
    }

    const fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Failed to fetch users",
            Self::Get => "Failed to fetch user",
            Self::Create => "Failed to create user",
            Self::Update => "Failed to update user",
            Self::Delete => "Failed to delete user",
        }
    }
}

/// User service implementing the user driving ports.
pub struct UserService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserService<R> {
    /// Create a new service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserService<R>
where
    R: UserRepository + ?Sized,
{
    fn map_persistence_error(operation: Operation) -> impl FnOnce(UserPersistenceError) -> Error {
        move |err| match err {
            UserPersistenceError::DuplicateEmail { email } => {
                debug!(operation = operation.name(), %email, "duplicate email rejected");
                Error::conflict(EMAIL_EXISTS)
            }
            other => {
                error!(operation = operation.name(), error = %other, "user repository failure");
                Error::internal(operation.failure_message())
            }
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list_newest_first()
            .await
            .map_err(Self::map_persistence_error(Operation::List))
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error(Operation::Get))?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, draft: UserDraft) -> Result<CreatedUser, Error> {
        let stored = self
            .repository
            .insert(&draft)
            .await
            .map_err(Self::map_persistence_error(Operation::Create))?;
        Ok(draft.created_echo(stored.id))
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<(), Error> {
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error(Operation::Update))?;
        if existing.is_none() {
            return Err(Error::not_found(USER_NOT_FOUND));
        }

        // The row can vanish between the lookup and the write.
        let updated = self
            .repository
            .update(id, &draft)
            .await
            .map_err(Self::map_persistence_error(Operation::Update))?;
        if updated {
            Ok(())
        } else {
            Err(Error::not_found(USER_NOT_FOUND))
        }
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_persistence_error(Operation::Delete))?;
        if deleted {
            Ok(())
        } else {
            Err(Error::not_found(USER_NOT_FOUND))
        }
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
