//! Error types for service glue operations.

use thiserror::Error;

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors surfaced by the service-level helpers.
///
/// These occur after configuration has validated successfully, so they are
/// service-level failures (reported to callers), never startup aborts.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A database operation failed. Driver context has already been logged.
    #[error("Database error: {message}")]
    Database { message: String },

    /// The presented API key was missing or did not match.
    #[error("Unauthorized: missing or invalid API key")]
    Unauthorized,

    /// A required integration value is not configured.
    #[error("Integration not configured: requires a value for {key}")]
    NotConfigured { key: String },

    /// The notification webhook call failed.
    #[error("Notification error: {0}")]
    Notification(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("Notification rejected ({status}): {body}")]
    NotificationRejected { status: u16, body: String },
}
