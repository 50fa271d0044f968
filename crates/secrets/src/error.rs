//! Error types for secret backend lookups.

use thiserror::Error;

/// Result type alias for secret store operations.
pub type Result<T> = std::result::Result<T, SecretStoreError>;

/// Errors that can occur while resolving a secret.
///
/// Every variant carries the identifier that was looked up so callers can
/// log actionable diagnostics. Whether a failed lookup is fatal is the
/// caller's decision, not this crate's.
#[derive(Error, Debug)]
pub enum SecretStoreError {
    /// The backend call itself failed (network, permissions, throttling).
    #[error("Lookup {id}: {message}")]
    Lookup { id: String, message: String },

    /// The backend answered but had no value under this identifier.
    #[error("No value stored for {id}")]
    NotFound { id: String },

    /// The stored value exists but is not valid UTF-8 text.
    #[error("Value for {id} is not valid UTF-8")]
    Decode { id: String },

    /// The backend kind string could not be parsed.
    #[error("Unknown secret backend '{0}' (expected 'secretsmanager' or 'ssm')")]
    UnknownBackend(String),
}
