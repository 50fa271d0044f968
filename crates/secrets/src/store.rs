//! Backend selection and dispatch.
//!
//! Responsibilities:
//! - Define the closed set of secret backend kinds (`SecretBackend`).
//! - Hold one connected strategy per kind (`SecretStore`) and dispatch
//!   `fetch` calls to it.
//! - Build AWS clients from the default provider chain with the region
//!   taken from `AWS_DEFAULT_REGION`, falling back to `us-east-1`.
//!
//! Does NOT handle:
//! - Deciding whether a failed lookup is fatal (callers own that policy).
//! - Caching resolved values (the configuration snapshot owns its cache).

use std::str::FromStr;

use aws_config::Region;

use crate::error::{Result, SecretStoreError};
use crate::secrets_manager::SecretsManagerStore;
use crate::ssm::SsmStore;
use crate::static_store::StaticStore;

/// Region used when `AWS_DEFAULT_REGION` is not set.
pub const DEFAULT_REGION: &str = "us-east-1";

/// The kind of remote secret backend to resolve identifiers against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretBackend {
    /// AWS Secrets Manager, identifiers namespaced as `<stack>/<id>`.
    SecretsManager,
    /// AWS SSM Parameter Store, identifiers used verbatim with decryption.
    Ssm,
}

impl SecretBackend {
    /// Canonical lowercase name, matching the accepted `FromStr` inputs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SecretsManager => "secretsmanager",
            Self::Ssm => "ssm",
        }
    }
}

impl FromStr for SecretBackend {
    type Err = SecretStoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "secretsmanager" | "secrets-manager" => Ok(Self::SecretsManager),
            "ssm" => Ok(Self::Ssm),
            other => Err(SecretStoreError::UnknownBackend(other.to_string())),
        }
    }
}

/// A connected secret resolution strategy.
///
/// One variant per backend kind; all variants expose the same capability:
/// resolve an identifier to a string value. The `Static` variant backs
/// local development and tests without any network access.
pub enum SecretStore {
    SecretsManager(SecretsManagerStore),
    Ssm(SsmStore),
    Static(StaticStore),
}

impl SecretStore {
    /// Connect to the given backend kind using the ambient AWS environment.
    pub async fn connect(backend: SecretBackend) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region_name()))
            .load()
            .await;

        match backend {
            SecretBackend::SecretsManager => {
                Self::SecretsManager(SecretsManagerStore::new(&sdk_config))
            }
            SecretBackend::Ssm => Self::Ssm(SsmStore::new(&sdk_config)),
        }
    }

    /// Fetch the value for `id` within the given `scope` (deployment stack).
    ///
    /// Only Secrets Manager namespaces identifiers by scope; SSM parameter
    /// names and static entries are used verbatim.
    pub async fn fetch(&self, scope: &str, id: &str) -> Result<String> {
        tracing::debug!(scope, id, "fetching secret");
        match self {
            Self::SecretsManager(store) => store.fetch(&format!("{scope}/{id}")).await,
            Self::Ssm(store) => store.fetch(id).await,
            Self::Static(store) => store.fetch(id),
        }
    }
}

fn region_name() -> String {
    std::env::var("AWS_DEFAULT_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!(
            "secretsmanager".parse::<SecretBackend>().unwrap(),
            SecretBackend::SecretsManager
        );
        assert_eq!("SSM".parse::<SecretBackend>().unwrap(), SecretBackend::Ssm);
        assert_eq!(
            " Secrets-Manager ".parse::<SecretBackend>().unwrap(),
            SecretBackend::SecretsManager
        );
        assert!("vault".parse::<SecretBackend>().is_err());
    }

    #[tokio::test]
    async fn test_static_store_ignores_scope() {
        let store = SecretStore::Static(StaticStore::from_entries([("apikey", "abc123")]));
        let value = store.fetch("dev", "apikey").await.unwrap();
        assert_eq!(value, "abc123");
    }
}
