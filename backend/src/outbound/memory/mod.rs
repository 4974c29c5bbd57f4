//! Process-local user storage.
//!
//! [`InMemoryUserRepository`] implements the same ports as the PostgreSQL
//! adapters, including case-insensitive email uniqueness and newest-first
//! ordering, so the HTTP surface behaves identically without a database.
//! State lives for the lifetime of the process.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{StorageHealth, StorageHealthError, UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

#[derive(Default)]
struct State {
    users: Vec<User>,
    last_id: i64,
}

impl State {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        let wanted = email.to_lowercase();
        self.users
            .iter()
            .any(|user| Some(user.id) != except && user.email.to_lowercase() == wanted)
    }
}

/// In-memory implementation of [`UserRepository`] and [`StorageHealth`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use users_api::domain::ports::UserRepository;
/// use users_api::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryUserRepository::new(Arc::new(DefaultClock));
/// assert!(repo.list_newest_first().await.expect("list").is_empty());
/// # });
/// ```
pub struct InMemoryUserRepository {
    state: Mutex<State>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserRepository {
    /// Create an empty store stamping `created_at` from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(State::default()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, UserPersistenceError> {
        self.state
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_newest_first(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut users = self.lock()?.users.clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(users)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.users.iter().find(|user| user.id == id).cloned())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut state = self.lock()?;
        let email = draft.email().as_str();
        if state.email_taken(email, None) {
            return Err(UserPersistenceError::duplicate_email(email));
        }

        state.last_id += 1;
        let user = User {
            id: UserId::new(state.last_id),
            name: draft.name().as_str().to_owned(),
            email: email.to_owned(),
            age: draft.age(),
            created_at: self.clock.utc(),
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<bool, UserPersistenceError> {
        let mut state = self.lock()?;
        let email = draft.email().as_str();
        if state.email_taken(email, Some(id)) {
            return Err(UserPersistenceError::duplicate_email(email));
        }

        let Some(user) = state.users.iter_mut().find(|user| user.id == id) else {
            return Ok(false);
        };
        user.name = draft.name().as_str().to_owned();
        user.email = email.to_owned();
        user.age = draft.age();
        Ok(true)
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.lock()?;
        let before = state.users.len();
        state.users.retain(|user| user.id != id);
        Ok(state.users.len() < before)
    }
}

#[async_trait]
impl StorageHealth for InMemoryUserRepository {
    async fn probe(&self) -> Result<(), StorageHealthError> {
        self.state
            .lock()
            .map(|_| ())
            .map_err(|_| StorageHealthError::unreachable("in-memory user store lock poisoned"))
    }
}
