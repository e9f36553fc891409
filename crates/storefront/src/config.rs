//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `RAVE_API_BASE_URL` - Base URL of the remote Rave REST API
//!
//! ## Optional
//! - `RAVE_API_TOKEN` - Bearer token for authenticated API calls (falls back
//!   to the token file written by `rave login`)
//! - `RAVE_CART_PATH` - Path of the persisted cart file (default: `.rave/cart.json`)
//! - `RAVE_TOKEN_PATH` - Path of the persisted auth token (default: `.rave/token`)
//! - `RAVE_HTTP_TIMEOUT_SECS` - HTTP client timeout in seconds (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_CART_PATH: &str = ".rave/cart.json";
const DEFAULT_TOKEN_PATH: &str = ".rave/token";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the remote Rave REST API
    pub api_base_url: Url,
    /// Bearer token for authenticated API calls
    pub api_token: Option<SecretString>,
    /// Path of the persisted cart file
    pub cart_path: PathBuf,
    /// Path of the persisted auth token
    pub token_path: PathBuf,
    /// HTTP client timeout
    pub http_timeout: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. When
    /// `RAVE_API_TOKEN` is unset, the token file (if any) is read instead,
    /// so a `rave login` survives across invocations.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_required_env("RAVE_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("RAVE_API_BASE_URL".to_string(), e.to_string())
            })?;
        let cart_path = PathBuf::from(get_env_or_default("RAVE_CART_PATH", DEFAULT_CART_PATH));
        let token_path = PathBuf::from(get_env_or_default("RAVE_TOKEN_PATH", DEFAULT_TOKEN_PATH));
        let http_timeout_secs = get_env_or_default(
            "RAVE_HTTP_TIMEOUT_SECS",
            &DEFAULT_HTTP_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("RAVE_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        let api_token = get_optional_env("RAVE_API_TOKEN")
            .map(SecretString::from)
            .or_else(|| read_token_file(&token_path));
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            api_base_url,
            api_token,
            cart_path,
            token_path,
            http_timeout: Duration::from_secs(http_timeout_secs),
            sentry_dsn,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read the persisted auth token, if one has been saved.
fn read_token_file(path: &std::path::Path) -> Option<SecretString> {
    let raw = std::fs::read_to_string(path).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(SecretString::from(trimmed.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_token_file_missing() {
        assert!(read_token_file(std::path::Path::new("/nonexistent/token")).is_none());
    }

    #[test]
    fn test_read_token_file_trims_whitespace() {
        use secrecy::ExposeSecret;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "abc123\n").unwrap();

        let token = read_token_file(&path).unwrap();
        assert_eq!(token.expose_secret(), "abc123");
    }

    #[test]
    fn test_read_token_file_empty_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();

        assert!(read_token_file(&path).is_none());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("RAVE_API_BASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: RAVE_API_BASE_URL"
        );
    }
}
