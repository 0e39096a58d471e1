//! Tutoring backend client configuration.
//!
//! Base URL and credentials for the remote backend. Loaded from
//! environment variables; override via explicit construction for tests.

use url::Url;

/// Configuration for connecting to the tutoring backend.
///
/// Custom `Debug` implementation redacts the `api_token` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct TutoringApiConfig {
    /// Base URL of the backend, e.g. `https://tutoring.api.example.com`.
    pub base_url: Url,
    /// Bearer token for API authentication.
    pub api_token: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for TutoringApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TutoringApiConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl TutoringApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `TUTORING_API_URL` (required)
    /// - `TUTORING_API_TOKEN` (required)
    /// - `TUTORING_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = std::env::var("TUTORING_API_URL").map_err(|_| ConfigError::MissingUrl)?;
        let base_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidUrl("TUTORING_API_URL".to_string(), e.to_string()))?;
        let api_token =
            std::env::var("TUTORING_API_TOKEN").map_err(|_| ConfigError::MissingToken)?;

        Ok(Self {
            base_url,
            api_token,
            timeout_secs: std::env::var("TUTORING_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TUTORING_API_URL environment variable is required")]
    MissingUrl,
    #[error("TUTORING_API_TOKEN environment variable is required")]
    MissingToken,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_builds() {
        let cfg = TutoringApiConfig {
            base_url: "http://127.0.0.1:9300".parse().unwrap(),
            api_token: "test-token".into(),
            timeout_secs: 5,
        };
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9300/");
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn debug_redacts_token() {
        let cfg = TutoringApiConfig {
            base_url: "http://127.0.0.1:9300".parse().unwrap(),
            api_token: "super-secret".into(),
            timeout_secs: 5,
        };
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
