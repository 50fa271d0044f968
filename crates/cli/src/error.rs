//! CLI exit codes for scripting and automation.
//!
//! Invariants:
//! - Exit code 2 always means the configuration itself is unusable
//!   (deployment tooling treats it as "do not start the service").

use svcutil_config::ConfigError;
use svcutil_secrets::SecretStoreError;
use svcutil_service::ServiceError;

/// Structured exit codes for svcutil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Fatal configuration error - a required key did not resolve.
    ///
    /// The service must not be started with this configuration.
    ConfigurationError = 2,

    /// Notification delivery failed or the integration is not configured.
    NotificationError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingDbPassword
            | ConfigError::MissingApiKey
            | ConfigError::InvalidStack(_) => ExitCode::ConfigurationError,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

impl From<&SecretStoreError> for ExitCode {
    fn from(err: &SecretStoreError) -> Self {
        match err {
            SecretStoreError::UnknownBackend(_) => ExitCode::ConfigurationError,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ServiceError> for ExitCode {
    fn from(err: &ServiceError) -> Self {
        match err {
            ServiceError::NotConfigured { .. }
            | ServiceError::Notification(_)
            | ServiceError::NotificationRejected { .. } => ExitCode::NotificationError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error, walking the chain
    /// for known error types. Unknown errors are general failures.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<SecretStoreError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ServiceError>() {
                return ExitCode::from(err);
            }
        }
        ExitCode::GeneralError
    }
}
