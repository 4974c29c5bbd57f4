//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports describe how the domain reaches storage; driving ports are
//! the use-cases inbound adapters call. Each driven port exposes strongly
//! typed errors so adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod storage_health;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use storage_health::MockStorageHealth;
pub use storage_health::{StorageHealth, StorageHealthError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
