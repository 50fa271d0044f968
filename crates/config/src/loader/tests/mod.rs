//! Loader test suite, organized by concern:
//! - `env_tests`: environment precedence over everything else.
//! - `local_tests`: vars file handling, including non-LOCAL stacks and
//!   malformed documents.
//! - `secrets_tests`: backend resolution, caching, failure swallowing and
//!   the idempotent singleton.
//! - `validation_tests`: fail-fast required-key checks.
//!
//! Env-sensitive tests run under `#[serial]` and scope variables with
//! `temp_env::with_vars`; async resolution runs on a throwaway
//! current-thread runtime inside the scoped closure.

mod env_tests;
mod validation_tests;

use std::io::Write;

use tempfile::NamedTempFile;

/// Required-key env entries for tests that exercise something other than
/// validation itself.
pub(crate) const REQUIRED_KEYS: [(&str, Option<&str>); 2] = [
    ("DB_PWD", Some("test-db-password")),
    ("APP_API_KEY", Some("test-api-key")),
];

pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build test runtime")
        .block_on(future)
}

pub(crate) fn write_vars_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create vars file");
    file.write_all(content.as_bytes()).expect("write vars file");
    file
}
