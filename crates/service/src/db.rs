//! Database session-pool wrapper.
//!
//! Responsibilities:
//! - Define the narrow `SessionPool` interface the rest of the system
//!   depends on (query, update, ping).
//! - Log driver error context/message at ERROR and map failures to
//!   `ServiceError::Database`.
//!
//! Does NOT handle:
//! - Pool construction, DSNs, or SQL mechanics — the pooling primitive is an
//!   external collaborator configured from `Config::db_config()`.

use async_trait::async_trait;
use tracing::error;

use crate::error::{Result, ServiceError};

/// Error shape reported by database drivers: a context (where) and a
/// message (what).
#[derive(Debug, Clone)]
pub struct PoolError {
    pub context: String,
    pub message: String,
}

/// The capability this crate needs from a pooling primitive.
#[async_trait]
pub trait SessionPool: Send + Sync {
    /// Execute a read query, returning rows as JSON objects keyed by column.
    async fn execute_query(
        &self,
        query: &str,
        args: &[(&str, &str)],
    ) -> std::result::Result<Vec<serde_json::Value>, PoolError>;

    /// Execute an insert/update statement, returning the affected row count.
    async fn execute_update(
        &self,
        query: &str,
        args: &[(&str, &str)],
    ) -> std::result::Result<u64, PoolError>;

    /// Verify connectivity with a trivial round trip.
    async fn ping(&self) -> std::result::Result<(), PoolError>;
}

/// Wrapper that owns error logging and error mapping for a session pool.
pub struct DbUtil<P: SessionPool> {
    pool: P,
}

impl<P: SessionPool> DbUtil<P> {
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    /// Execute a query via the session pool.
    pub async fn execute_query(
        &self,
        query: &str,
        args: &[(&str, &str)],
    ) -> Result<Vec<serde_json::Value>> {
        self.pool.execute_query(query, args).await.map_err(|err| {
            log_driver_error(&err);
            ServiceError::Database {
                message: "Unable to execute query against the database".to_string(),
            }
        })
    }

    /// Execute an insert/update via the session pool.
    pub async fn execute_update(&self, query: &str, args: &[(&str, &str)]) -> Result<u64> {
        self.pool.execute_update(query, args).await.map_err(|err| {
            log_driver_error(&err);
            ServiceError::Database {
                message: "Unable to execute update against the database".to_string(),
            }
        })
    }

    /// Verify connectivity with a simple round trip.
    pub async fn health_check(&self) -> Result<()> {
        self.pool.ping().await.map_err(|err| {
            log_driver_error(&err);
            ServiceError::Database {
                message: "Error encountered when attempting healthcheck with the database"
                    .to_string(),
            }
        })
    }
}

fn log_driver_error(err: &PoolError) {
    error!("Context: {}", err.context);
    error!("Message: {}", err.message);
}
