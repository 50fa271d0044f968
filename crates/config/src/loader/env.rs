//! Environment variable reading for configuration resolution.
//!
//! Invariants:
//! - The process environment always wins over resolved overlay values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::collections::BTreeMap;

use crate::constants::NO_VALUE_FOUND;

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Resolve a key against the environment first, then the overlay of values
/// contributed during resolution, then the sentinel.
pub(crate) fn resolve(key: &str, overlay: &BTreeMap<String, String>) -> String {
    env_var_or_none(key)
        .or_else(|| overlay.get(key).cloned())
        .unwrap_or_else(|| NO_VALUE_FOUND.to_string())
}
