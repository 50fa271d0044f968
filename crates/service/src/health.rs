//! Health check over the database session pool.
//!
//! A post-initialization database failure is a service-level FAIL report
//! with error text, never a process crash.

use serde::Serialize;
use tracing::error;

use crate::db::{DbUtil, SessionPool};

/// PASS/FAIL status of a health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

/// Health check outcome as reported to callers.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn pass() -> Self {
        Self {
            status: HealthStatus::Pass,
            error: None,
        }
    }

    pub fn fail(error: String) -> Self {
        Self {
            status: HealthStatus::Fail,
            error: Some(error),
        }
    }
}

/// Verify availability and responsiveness via a trivial database round trip.
pub async fn check_health<P: SessionPool>(db: &DbUtil<P>) -> HealthReport {
    match db.health_check().await {
        Ok(()) => HealthReport::pass(),
        Err(err) => {
            error!("API health check failure: {err}");
            HealthReport::fail(err.to_string())
        }
    }
}
