//! Fail-fast validation: DB password and API key are required.

use serial_test::serial;

use super::block_on;
use crate::constants::NO_VALUE_FOUND;
use crate::loader::{ConfigError, ConfigLoader};
use crate::types::Stack;

#[test]
#[serial]
fn test_missing_db_password_is_fatal() {
    temp_env::with_vars(
        [
            ("DB_PWD", None),
            ("DB_CONFIG", None),
            ("APP_API_KEY", Some("test-api-key")),
        ],
        || {
            let err = block_on(ConfigLoader::new().with_stack(Stack::Prod).build())
                .expect_err("must not publish a snapshot");
            assert!(matches!(err, ConfigError::MissingDbPassword));
        },
    );
}

#[test]
#[serial]
fn test_missing_api_key_is_fatal() {
    temp_env::with_vars(
        [
            ("DB_PWD", Some("test-db-password")),
            ("APP_API_KEY", None),
        ],
        || {
            let err = block_on(ConfigLoader::new().with_stack(Stack::Prod).build())
                .expect_err("must not publish a snapshot");
            assert!(matches!(err, ConfigError::MissingApiKey));
        },
    );
}

#[test]
#[serial]
fn test_empty_and_sentinel_values_count_as_missing() {
    for bad in ["", "   ", NO_VALUE_FOUND] {
        temp_env::with_vars(
            [
                ("DB_PWD", Some("test-db-password")),
                ("DB_CONFIG", None),
                ("APP_API_KEY", Some(bad)),
            ],
            || {
                let err = block_on(ConfigLoader::new().with_stack(Stack::Prod).build())
                    .expect_err("empty or sentinel api key must be fatal");
                assert!(matches!(err, ConfigError::MissingApiKey));
            },
        );
    }
}

#[test]
#[serial]
fn test_sentinel_db_password_in_json_config_is_fatal() {
    temp_env::with_vars(
        [
            ("DB_CONFIG", Some(r#"{"host":"h","port":"1521","service":"s","user":"u"}"#)),
            ("DB_PWD", None),
            ("APP_API_KEY", Some("test-api-key")),
        ],
        || {
            let err = block_on(ConfigLoader::new().with_stack(Stack::Prod).build())
                .expect_err("json config without pwd must be fatal");
            assert!(matches!(err, ConfigError::MissingDbPassword));
        },
    );
}
