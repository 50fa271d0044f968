//! Guarded one-time initialization of the configuration snapshot.
//!
//! Responsibilities:
//! - Provide `ConfigCell`, a once-only async initialization cell: concurrent
//!   callers race to resolve exactly one snapshot, later callers get the
//!   cached one without touching the vars file or the secret backend.
//! - Provide the process-wide convenience accessor (`shared`/`try_shared`).
//!
//! The snapshot itself stays injectable: consumers that want explicit wiring
//! call `ConfigLoader::build` directly and pass the `Config` along.

use tokio::sync::OnceCell;

use crate::loader::{ConfigError, ConfigLoader};
use crate::types::Config;

/// A once-only cell holding a resolved [`Config`].
pub struct ConfigCell {
    cell: OnceCell<Config>,
}

impl ConfigCell {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// Return the cached snapshot, resolving it with `loader` on first call.
    ///
    /// A failed resolution publishes nothing; the next call retries with its
    /// own loader. Once a snapshot is published the loader argument is
    /// ignored entirely.
    pub async fn get_or_init(&self, loader: ConfigLoader) -> Result<&Config, ConfigError> {
        self.cell.get_or_try_init(|| loader.build()).await
    }

    /// The cached snapshot, if one has been published.
    pub fn get(&self) -> Option<&Config> {
        self.cell.get()
    }
}

impl Default for ConfigCell {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED: ConfigCell = ConfigCell::new();

/// Resolve (on first call) and return the process-wide snapshot.
pub async fn shared(loader: ConfigLoader) -> Result<&'static Config, ConfigError> {
    SHARED.get_or_init(loader).await
}

/// The process-wide snapshot, if `shared` has completed successfully.
pub fn try_shared() -> Option<&'static Config> {
    SHARED.get()
}
