//! Port for probing storage connectivity from the health endpoint.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Failures reported by a storage connectivity probe.
    pub enum StorageHealthError {
        /// Storage could not be reached or did not answer the probe.
        Unreachable { message: String } => "storage unreachable: {message}",
    }
}

/// Lightweight connectivity check against the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// Run a cheap round trip against storage.
    async fn probe(&self) -> Result<(), StorageHealthError>;
}
