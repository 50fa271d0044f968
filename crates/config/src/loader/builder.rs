//! Configuration loader implementation.
//!
//! Responsibilities:
//! - Merge the process environment, the local vars file (LOCAL stack only)
//!   and the secret backend into one immutable `Config` snapshot.
//! - Enforce the startup invariants: DB password and API key must resolve,
//!   otherwise `build` fails and no snapshot is published.
//!
//! Does NOT handle:
//! - Secret backend transport (see svcutil-secrets).
//! - Process-wide caching of the snapshot (see global.rs).
//!
//! Invariants:
//! - Precedence per key: environment > backend-resolved secret > plain YAML
//!   value > sentinel. Plain YAML values are only consulted for LOCAL.
//! - Resolved values land in an in-memory overlay owned by the snapshot;
//!   the OS environment is never mutated.
//! - A failed secret lookup is logged and swallowed; only the required-key
//!   validation at the end of `build` may raise.

use std::collections::BTreeMap;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use svcutil_secrets::SecretStore;

use super::env::{env_var_or_none, resolve};
use super::error::ConfigError;
use super::local::LocalVars;
use crate::constants::{
    APP_API_KEY, APP_DESCRIPTION, APP_NAME, APP_URL_PREFIX, DB_CONFIG, DB_HOST, DB_PORT, DB_PWD,
    DB_SERVICE, DB_USER, DEFAULT_LOCAL_VARS_PATH, NO_VALUE_FOUND,
};
use crate::types::{ApiConfig, Config, DbConfig, Stack};

/// Builds a [`Config`] snapshot from the environment, the local vars file,
/// and an injected secret store.
pub struct ConfigLoader {
    stack: Stack,
    local_vars_path: PathBuf,
    secret_store: Option<SecretStore>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader for the LOCAL stack with the default vars file path
    /// and no secret store.
    pub fn new() -> Self {
        Self {
            stack: Stack::Local,
            local_vars_path: PathBuf::from(DEFAULT_LOCAL_VARS_PATH),
            secret_store: None,
        }
    }

    /// Set the deployment stack.
    pub fn with_stack(mut self, stack: Stack) -> Self {
        self.stack = stack;
        self
    }

    /// Override the local vars file path (consulted only for LOCAL).
    pub fn with_local_vars_path(mut self, path: PathBuf) -> Self {
        self.local_vars_path = path;
        self
    }

    /// Inject the secret store used to resolve secret references
    /// (consulted only for LOCAL).
    pub fn with_secret_store(mut self, store: SecretStore) -> Self {
        self.secret_store = Some(store);
        self
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Missing `.env` files are silently ignored. Error messages never
    /// include raw `.env` line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Resolve the snapshot.
    ///
    /// For LOCAL, the vars file is read and its secret references resolved
    /// through the injected store. For every other stack the environment is
    /// assumed pre-populated by the deployment platform and no file or
    /// backend access happens at all.
    pub async fn build(self) -> Result<Config, ConfigError> {
        let mut overlay = BTreeMap::new();

        if self.stack.is_local() {
            let vars = LocalVars::load(&self.local_vars_path);
            self.resolve_secret_refs(&vars, &mut overlay).await;
            // Plain values rank below resolved secrets; never overwrite.
            for (name, value) in vars.plain_pairs() {
                overlay.entry(name).or_insert(value);
            }
        }

        let api = read_api_config(&overlay);
        let db = read_db_config(&overlay);

        // Fail-fast startup invariants; exposing here is the validation site.
        if is_missing(api.api_key.expose_secret()) {
            return Err(ConfigError::MissingApiKey);
        }
        if is_missing(db.password.expose_secret()) {
            return Err(ConfigError::MissingDbPassword);
        }

        Ok(Config::new(self.stack, db, api, overlay))
    }

    async fn resolve_secret_refs(&self, vars: &LocalVars, overlay: &mut BTreeMap<String, String>) {
        let scope = self.stack.effective();
        for (name, id) in vars.secret_refs() {
            // Fast path: the deployment platform (or developer shell) already
            // injected the value; the environment wins regardless.
            if env_var_or_none(name).is_some() {
                debug!(name, "secret already present in environment; skipping backend");
                continue;
            }
            if overlay.contains_key(name) {
                continue;
            }
            let Some(store) = &self.secret_store else {
                warn!(name, "no secret backend configured; secret left unresolved");
                continue;
            };
            match store.fetch(scope.as_str(), id).await {
                Ok(value) => {
                    overlay.insert(name.to_string(), value);
                }
                Err(e) => {
                    warn!(name, secret_id = id, error = %e, "secret lookup failed; value unresolved");
                }
            }
        }
    }
}

/// A value counts as missing when it is empty or the sentinel.
fn is_missing(value: &str) -> bool {
    value.is_empty() || value == NO_VALUE_FOUND
}

fn read_api_config(overlay: &BTreeMap<String, String>) -> ApiConfig {
    ApiConfig {
        api_key: SecretString::new(resolve(APP_API_KEY, overlay).into()),
        title: resolve(APP_NAME, overlay),
        description: resolve(APP_DESCRIPTION, overlay),
        url_prefix: env_var_or_none(APP_URL_PREFIX)
            .or_else(|| overlay.get(APP_URL_PREFIX).cloned()),
    }
}

fn read_db_config(overlay: &BTreeMap<String, String>) -> DbConfig {
    let raw = resolve(DB_CONFIG, overlay);
    if raw != NO_VALUE_FOUND {
        if let Some(db) = db_from_json(&raw) {
            return db;
        }
    }

    DbConfig {
        host: resolve(DB_HOST, overlay),
        port: resolve(DB_PORT, overlay),
        service: resolve(DB_SERVICE, overlay),
        user: resolve(DB_USER, overlay),
        password: SecretString::new(resolve(DB_PWD, overlay).into()),
    }
}

/// Parse the JSON-encoded DB config form. A value that is not a JSON object
/// is logged and ignored so the flat `DB_*` keys still apply.
fn db_from_json(raw: &str) -> Option<DbConfig> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Object(map)) => Some(DbConfig {
            host: json_field(&map, "host"),
            port: json_field(&map, "port"),
            service: json_field(&map, "service"),
            user: json_field(&map, "user"),
            password: SecretString::new(json_field(&map, "pwd").into()),
        }),
        Ok(_) => {
            warn!("DB_CONFIG is not a JSON object; falling back to flat DB_* keys");
            None
        }
        Err(e) => {
            warn!(error = %e, "DB_CONFIG is not valid JSON; falling back to flat DB_* keys");
            None
        }
    }
}

fn json_field(map: &serde_json::Map<String, serde_json::Value>, key: &str) -> String {
    match map.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => NO_VALUE_FOUND.to_string(),
    }
}
