//! Environment always wins, regardless of stack or vars file content.

use secrecy::ExposeSecret;
use serial_test::serial;

use super::{REQUIRED_KEYS, block_on, write_vars_file};
use crate::constants::NO_VALUE_FOUND;
use crate::loader::ConfigLoader;
use crate::types::Stack;
use svcutil_secrets::{SecretStore, StaticStore};

#[test]
#[serial]
fn test_env_beats_plain_vars_and_secrets() {
    let vars_file = write_vars_file(
        "vars:\n  - name: DB_HOST\n    value: yaml-host\nsecrets:\n  - DB_USER: db-user-secret\n",
    );
    let store = StaticStore::from_entries([("db-user-secret", "store-user")]);

    let mut env = vec![
        ("DB_HOST", Some("env-host")),
        ("DB_USER", Some("env-user")),
        ("DB_CONFIG", None),
    ];
    env.extend(REQUIRED_KEYS);

    temp_env::with_vars(env, || {
        let config = block_on(
            ConfigLoader::new()
                .with_stack(Stack::Local)
                .with_local_vars_path(vars_file.path().to_path_buf())
                .with_secret_store(SecretStore::Static(store))
                .build(),
        )
        .expect("resolution succeeds");

        assert_eq!(config.db_config().host, "env-host");
        assert_eq!(config.db_config().user, "env-user");
        assert_eq!(config.get_value("DB_HOST"), "env-host");
    });
}

#[test]
#[serial]
fn test_env_present_secret_skips_backend() {
    let vars_file = write_vars_file("secrets:\n  - DB_USER: db-user-secret\n");
    // A store with no matching entry: if the loader consulted it, DB_USER
    // would stay unresolved. The env fast path must keep it populated.
    let empty_store = StaticStore::default();

    let mut env = vec![("DB_USER", Some("env-user"))];
    env.extend(REQUIRED_KEYS);

    temp_env::with_vars(env, || {
        let config = block_on(
            ConfigLoader::new()
                .with_stack(Stack::Local)
                .with_local_vars_path(vars_file.path().to_path_buf())
                .with_secret_store(SecretStore::Static(empty_store))
                .build(),
        )
        .expect("resolution succeeds");

        assert_eq!(config.db_config().user, "env-user");
    });
}

#[test]
#[serial]
fn test_required_keys_from_env_only() {
    let mut env = vec![
        ("DB_HOST", None),
        ("DB_PORT", None),
        ("DB_SERVICE", None),
        ("DB_USER", None),
        ("DB_CONFIG", None),
        ("APP_NAME", Some("payments-api")),
        ("APP_DESCRIPTION", None),
        ("APP_URL_PREFIX", None),
    ];
    env.extend(REQUIRED_KEYS);

    temp_env::with_vars(env, || {
        let config = block_on(ConfigLoader::new().with_stack(Stack::Prod).build())
            .expect("resolution succeeds");

        assert_eq!(config.stack(), Stack::Prod);
        assert_eq!(
            config.api_config().api_key.expose_secret(),
            "test-api-key"
        );
        assert_eq!(config.api_config().title, "payments-api");
        assert_eq!(config.api_config().description, NO_VALUE_FOUND);
        assert!(config.api_config().url_prefix.is_none());
        assert_eq!(config.db_config().host, NO_VALUE_FOUND);
        assert_eq!(config.get_value("_SVCUTIL_NEVER_SET"), NO_VALUE_FOUND);
    });
}
