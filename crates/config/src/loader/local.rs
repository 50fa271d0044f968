//! Local vars file parsing (LOCAL stack only).
//!
//! Responsibilities:
//! - Parse the YAML document holding plain name/value pairs (`vars`) and
//!   logical-name to secret-identifier maps (`secrets`).
//! - Treat an unreadable or malformed file as an empty contribution: log at
//!   WARN and carry on. The required-key validation decides whether the
//!   missing values are ultimately fatal.
//!
//! Does NOT handle:
//! - Secret backend calls (the builder drives those from the parsed refs).
//! - Precedence (plain values only apply when the environment has no value).

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Parsed local vars document. Both sections are optional.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocalVars {
    #[serde(default)]
    pub vars: Vec<PlainVar>,
    #[serde(default)]
    pub secrets: Vec<BTreeMap<String, String>>,
}

/// One plain name/value entry. Values may be any YAML scalar (ports are
/// commonly written as bare numbers) and are stringified on use.
#[derive(Debug, Deserialize)]
pub(crate) struct PlainVar {
    pub name: String,
    pub value: serde_yaml::Value,
}

impl LocalVars {
    /// Read and parse the file at `path`, logging and returning an empty
    /// document on any read or parse failure.
    pub(crate) fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "unable to read local vars file; continuing without it"
                );
                return Self::default();
            }
        };

        match serde_yaml::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "malformed local vars file; continuing without it"
                );
                Self::default()
            }
        }
    }

    /// Plain pairs with scalar values stringified. Non-scalar values are
    /// logged and skipped.
    pub(crate) fn plain_pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.vars.iter().filter_map(|var| {
            match scalar_string(&var.value) {
                Some(value) => Some((var.name.clone(), value)),
                None => {
                    warn!(name = %var.name, "local var value is not a scalar; skipping");
                    None
                }
            }
        })
    }

    /// Flattened (logical name, secret identifier) pairs from the secrets
    /// section, in document order.
    pub(crate) fn secret_refs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.secrets
            .iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

fn scalar_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
