//! AWS Secrets Manager backend.

use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::error::DisplayErrorContext;

use crate::error::{Result, SecretStoreError};

/// Resolves secret identifiers through AWS Secrets Manager.
pub struct SecretsManagerStore {
    client: Client,
}

impl SecretsManagerStore {
    /// Create a store from a shared SDK configuration.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Fetch a secret by its full identifier (scope prefix already applied).
    ///
    /// Prefers the string form of the secret; binary secrets are accepted
    /// when they decode as UTF-8.
    pub async fn fetch(&self, id: &str) -> Result<String> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(id)
            .send()
            .await
            .map_err(|e| SecretStoreError::Lookup {
                id: id.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        if let Some(value) = response.secret_string() {
            return Ok(value.to_string());
        }

        if let Some(blob) = response.secret_binary() {
            return String::from_utf8(blob.clone().into_inner())
                .map_err(|_| SecretStoreError::Decode { id: id.to_string() });
        }

        Err(SecretStoreError::NotFound { id: id.to_string() })
    }
}
