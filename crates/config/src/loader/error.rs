//! Error types for configuration resolution.
//!
//! Invariants:
//! - Only the final required-key validation raises; per-key failures during
//!   resolution (a missing secret, a malformed vars file) are logged and
//!   swallowed so that validation gives one authoritative answer.
//! - Error messages never include secret values.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while building the configuration snapshot.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `DB_PWD` resolved to nothing. The process must not serve traffic.
    #[error("db password is missing (DB_PWD resolved to no value)")]
    MissingDbPassword,

    /// `APP_API_KEY` resolved to nothing. The process must not serve traffic.
    #[error("api key is missing (APP_API_KEY resolved to no value)")]
    MissingApiKey,

    /// An unrecognized stack identifier was supplied.
    #[error("Unknown stack '{0}' (expected local, sand, dev, test, stage or prod)")]
    InvalidStack(String),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is reported, never the offending
    /// line, so secrets cannot leak through error messages.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
