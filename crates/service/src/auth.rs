//! API-key verification for request handlers.

use secrecy::ExposeSecret;

use svcutil_config::ApiConfig;

use crate::error::{Result, ServiceError};

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Verify the presented API key against the configured one.
///
/// A missing header or any mismatch is `Unauthorized`; callers map that to
/// a 401. The configured key is exposed only at the comparison site.
pub fn verify_api_key(api: &ApiConfig, presented: Option<&str>) -> Result<()> {
    match presented {
        Some(key) if !key.is_empty() && key == api.api_key.expose_secret() => Ok(()),
        _ => Err(ServiceError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn api_config(key: &str) -> ApiConfig {
        ApiConfig {
            api_key: SecretString::new(key.to_string().into()),
            title: "payments-api".to_string(),
            description: "internal".to_string(),
            url_prefix: None,
        }
    }

    #[test]
    fn test_matching_key_is_accepted() {
        assert!(verify_api_key(&api_config("abc123"), Some("abc123")).is_ok());
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let err = verify_api_key(&api_config("abc123"), None).unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }

    #[test]
    fn test_mismatched_key_is_unauthorized() {
        let err = verify_api_key(&api_config("abc123"), Some("wrong")).unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }

    #[test]
    fn test_empty_presented_key_is_unauthorized() {
        // Guards the degenerate case of an empty configured key matching an
        // empty header value.
        let err = verify_api_key(&api_config(""), Some("")).unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }
}
