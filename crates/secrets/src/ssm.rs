//! AWS SSM Parameter Store backend.

use aws_sdk_ssm::Client;
use aws_sdk_ssm::error::DisplayErrorContext;

use crate::error::{Result, SecretStoreError};

/// Resolves secret identifiers as SSM parameters with decryption enabled.
pub struct SsmStore {
    client: Client,
}

impl SsmStore {
    /// Create a store from a shared SDK configuration.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Fetch a parameter by name. SecureString parameters are decrypted.
    pub async fn fetch(&self, name: &str) -> Result<String> {
        let response = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| SecretStoreError::Lookup {
                id: name.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        response
            .parameter()
            .and_then(|p| p.value())
            .map(|v| v.to_string())
            .ok_or_else(|| SecretStoreError::NotFound {
                id: name.to_string(),
            })
    }
}
