//! Configuration resolution for svcutil-based services.
//!
//! This crate merges three sources of truth into one immutable configuration
//! snapshot at process startup: the process environment, an optional local
//! YAML vars file (LOCAL stack only), and a remote secret backend. Downstream
//! components read the frozen snapshot and never re-resolve.

pub mod constants;
mod global;
mod loader;
mod types;

pub use global::{ConfigCell, shared, try_shared};
pub use loader::{ConfigError, ConfigLoader};
pub use types::{ApiConfig, Config, DbConfig, Stack};
