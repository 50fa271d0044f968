//! In-memory secret store for local development and tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Result, SecretStoreError};

/// A fixed map of identifier to value, with a lookup counter.
///
/// The counter is shared across clones, so a caller can keep a handle and
/// assert that resolution happened exactly once per process lifetime (the
/// snapshot is a cached singleton).
#[derive(Debug, Default, Clone)]
pub struct StaticStore {
    values: HashMap<String, String>,
    hits: Arc<AtomicUsize>,
}

impl StaticStore {
    /// Build a store from identifier/value pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Fetch a value by identifier, counting the lookup.
    pub fn fetch(&self, id: &str) -> Result<String> {
        self.hits.fetch_add(1, Ordering::Relaxed);
        self.values
            .get(id)
            .cloned()
            .ok_or_else(|| SecretStoreError::NotFound { id: id.to_string() })
    }

    /// Number of `fetch` calls made against this store.
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }
}
