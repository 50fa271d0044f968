//! Secret backend clients for svcutil.
//!
//! This crate resolves secret identifiers to values through one of a closed
//! set of backends: AWS Secrets Manager, AWS SSM Parameter Store, or an
//! in-memory static store for local development and tests.

mod error;
mod secrets_manager;
mod ssm;
mod static_store;
mod store;

pub use error::SecretStoreError;
pub use secrets_manager::SecretsManagerStore;
pub use ssm::SsmStore;
pub use static_store::StaticStore;
pub use store::{DEFAULT_REGION, SecretBackend, SecretStore};
