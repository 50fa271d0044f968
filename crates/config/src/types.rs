//! Core configuration types.
//!
//! Responsibilities:
//! - Define the deployment `Stack` identifier and its parsing rules.
//! - Define the immutable `Config` snapshot and its `db`/`api` views.
//!
//! Does NOT handle:
//! - Resolution or merging of values (see loader).
//! - Secret backend access (see svcutil-secrets).
//!
//! Invariants:
//! - `Config` is never mutated after construction; secrets are resolved once.
//! - DB password and API key are `secrecy::SecretString` so accidental Debug
//!   or log output stays redacted.
//! - `Stack::Local` performs secret lookups under the DEV namespace.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;

use crate::constants::NO_VALUE_FOUND;
use crate::loader::ConfigError;

/// Deployment environment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stack {
    Local,
    Sand,
    Dev,
    Test,
    Stage,
    Prod,
}

impl Stack {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Sand => "sand",
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Stage => "stage",
            Self::Prod => "prod",
        }
    }

    /// Whether this is the LOCAL stack (the only one that reads the vars
    /// file and calls the secret backend during resolution).
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    /// The stack used for secret-namespace lookups. LOCAL borrows the DEV
    /// namespace; every other stack is its own namespace.
    pub fn effective(&self) -> Stack {
        match self {
            Self::Local => Self::Dev,
            other => *other,
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stack {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "sand" => Ok(Self::Sand),
            "dev" => Ok(Self::Dev),
            "test" => Ok(Self::Test),
            "stage" => Ok(Self::Stage),
            "prod" => Ok(Self::Prod),
            other => Err(ConfigError::InvalidStack(other.to_string())),
        }
    }
}

/// Database connection settings view.
///
/// Values are kept as resolved strings; absent keys hold the sentinel. Only
/// the password is validated at build time.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: String,
    pub service: String,
    pub user: String,
    pub password: SecretString,
}

/// API surface settings view.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: SecretString,
    pub title: String,
    pub description: String,
    pub url_prefix: Option<String>,
}

/// The immutable, fully-resolved configuration snapshot.
///
/// Constructed once by [`crate::ConfigLoader::build`]; lives for the process
/// lifetime. The overlay holds values contributed by the local vars file and
/// the secret backend, so one remote fetch per logical name is enough.
#[derive(Clone)]
pub struct Config {
    stack: Stack,
    db: DbConfig,
    api: ApiConfig,
    overlay: BTreeMap<String, String>,
}

impl Config {
    pub(crate) fn new(
        stack: Stack,
        db: DbConfig,
        api: ApiConfig,
        overlay: BTreeMap<String, String>,
    ) -> Self {
        Self {
            stack,
            db,
            api,
            overlay,
        }
    }

    /// The stack this snapshot was resolved for.
    pub fn stack(&self) -> Stack {
        self.stack
    }

    /// Database settings view.
    pub fn db_config(&self) -> &DbConfig {
        &self.db
    }

    /// API settings view.
    pub fn api_config(&self) -> &ApiConfig {
        &self.api
    }

    /// Look up a configuration value by name.
    ///
    /// The process environment wins, then values cached during resolution,
    /// then the sentinel. Pure read; never re-resolves a secret.
    pub fn get_value(&self, name: &str) -> String {
        crate::loader::env_var_or_none(name)
            .or_else(|| self.overlay.get(name).cloned())
            .unwrap_or_else(|| NO_VALUE_FOUND.to_string())
    }
}

impl fmt::Debug for Config {
    /// Overlay values can be resolved secrets; only key names are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("stack", &self.stack)
            .field("db", &self.db)
            .field("api", &self.api)
            .field("overlay_keys", &self.overlay.keys().collect::<Vec<_>>())
            .finish()
    }
}
