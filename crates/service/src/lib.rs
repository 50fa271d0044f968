//! Thin service glue around the configuration snapshot: database session
//! pool wrapper, health check, API-key verification, and webhook
//! notifications.
//!
//! Each piece is a narrow interface over an external collaborator; the
//! engineering weight lives in svcutil-config.

mod auth;
mod db;
mod error;
mod health;
mod notify;

pub use auth::{API_KEY_HEADER, verify_api_key};
pub use db::{DbUtil, PoolError, SessionPool};
pub use error::ServiceError;
pub use health::{HealthReport, HealthStatus, check_health};
pub use notify::NotificationService;
