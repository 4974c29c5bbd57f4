//! Builders wiring port implementations into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;

use crate::domain::UserService;
use crate::domain::ports::{StorageHealth, UserRepository};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryUserRepository;
use crate::outbound::persistence::{DieselStorageHealth, DieselUserRepository};

use super::ServerConfig;

fn state_from_parts<R>(
    repository: Arc<R>,
    storage_health: Arc<dyn StorageHealth>,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    R: UserRepository + 'static,
{
    let service = Arc::new(UserService::new(repository));
    HttpState::new(service.clone(), service, storage_health, clock)
}

/// Build HTTP state backed by PostgreSQL when a pool is configured, otherwise
/// by a fresh in-memory store.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock = Arc::clone(&config.clock);
    let state = match &config.db_pool {
        Some(pool) => state_from_parts(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselStorageHealth::new(pool.clone())),
            clock,
        ),
        None => {
            let repository = Arc::new(InMemoryUserRepository::new(Arc::clone(&clock)));
            state_from_parts(repository.clone(), repository, clock)
        }
    };
    web::Data::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, UserDraft, UserName};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn memory_state_shares_one_store_between_query_and_command() {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("socket"));
        let state = build_http_state(&config);
        let draft = UserDraft::new(
            UserName::new("Ann").expect("name"),
            EmailAddress::new("ann@x.com").expect("email"),
            None,
        );

        let created = state
            .users_command
            .create_user(draft)
            .await
            .expect("create");
        let fetched = state.users.get_user(created.id).await.expect("get");

        assert_eq!(fetched.email, "ann@x.com");
        assert!(state.storage_health.probe().await.is_ok());
    }
}
