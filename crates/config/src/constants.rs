//! Centralized constants for configuration resolution.
//!
//! Key names and the sentinel are shared between the loader, the snapshot
//! views, and the tests; they live here to avoid string duplication.

// =============================================================================
// Sentinel
// =============================================================================

/// Placeholder returned when a configuration key has no resolvable value.
pub const NO_VALUE_FOUND: &str = "NO VALUE FOUND";

// =============================================================================
// Database keys
// =============================================================================

/// JSON-encoded database configuration. When this key resolves, it is parsed
/// as `{host, port, service, user, pwd}` and the flat `DB_*` keys are ignored.
pub const DB_CONFIG: &str = "DB_CONFIG";

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_SERVICE: &str = "DB_SERVICE";
pub const DB_USER: &str = "DB_USER";
pub const DB_PWD: &str = "DB_PWD";

// =============================================================================
// API keys
// =============================================================================

pub const APP_API_KEY: &str = "APP_API_KEY";
pub const APP_NAME: &str = "APP_NAME";
pub const APP_DESCRIPTION: &str = "APP_DESCRIPTION";
pub const APP_URL_PREFIX: &str = "APP_URL_PREFIX";

// =============================================================================
// Local vars file
// =============================================================================

/// Default path of the YAML vars file consulted for the LOCAL stack.
/// The document has two top-level keys: `vars` (a list of `{name, value}`
/// pairs) and `secrets` (a list of logical-name to secret-identifier maps).
pub const DEFAULT_LOCAL_VARS_PATH: &str = "/ansible_vars/dev_vars.yml";
