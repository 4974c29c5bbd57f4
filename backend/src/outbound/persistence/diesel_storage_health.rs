//! PostgreSQL connectivity probe backing the health endpoint.

use async_trait::async_trait;
use diesel::sql_query;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StorageHealth, StorageHealthError};

use super::pool::DbPool;

/// Probes PostgreSQL with `SELECT 1` on a pooled connection.
#[derive(Clone)]
pub struct DieselStorageHealth {
    pool: DbPool,
}

impl DieselStorageHealth {
    /// Create a probe sharing the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageHealth for DieselStorageHealth {
    async fn probe(&self) -> Result<(), StorageHealthError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| StorageHealthError::unreachable(err.to_string()))?;

        sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| StorageHealthError::unreachable(err.to_string()))
    }
}
