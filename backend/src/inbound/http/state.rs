//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{StorageHealth, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub storage_health: Arc<dyn StorageHealth>,
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use users_api::domain::UserService;
    /// use users_api::inbound::http::state::HttpState;
    /// use users_api::outbound::memory::InMemoryUserRepository;
    ///
    /// let repo = Arc::new(InMemoryUserRepository::new(Arc::new(DefaultClock)));
    /// let service = Arc::new(UserService::new(repo.clone()));
    /// let state = HttpState::new(service.clone(), service, repo, Arc::new(DefaultClock));
    /// let _data = actix_web::web::Data::new(state);
    /// ```
    pub fn new(
        users: Arc<dyn UsersQuery>,
        users_command: Arc<dyn UsersCommand>,
        storage_health: Arc<dyn StorageHealth>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            users_command,
            storage_health,
            clock,
        }
    }
}
