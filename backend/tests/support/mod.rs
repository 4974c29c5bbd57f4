//! Shared helpers for integration tests that need a real PostgreSQL.
//!
//! Each file under `backend/tests/` compiles as its own crate, so suites
//! pull these in with `mod support;`.

pub mod cluster_skip;
pub mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{provision_migrated_database, shared_cluster};
