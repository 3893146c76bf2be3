//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `WISATA_API_HOST` - Base URL of the content REST API
//!   (fallback: `API_HOST`)
//!
//! ## Optional
//! - `WISATA_STORAGE_URL` - Base URL for resolving relative image paths
//!   (fallback: `STORAGE_URL`)
//! - `WISATA_ADMIN_TOKEN` - Bearer token for admin-scoped operations

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Content API client configuration.
///
/// Implements `Debug` manually to redact the admin token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the content REST API (e.g. `https://api.example.com/api`).
    pub api_host: String,
    /// Base URL for resolving relative image paths.
    pub storage_url: Option<Url>,
    /// Bearer token for admin-scoped operations. Public listing queries work
    /// without one.
    pub admin_token: Option<SecretString>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_host", &self.api_host)
            .field("storage_url", &self.storage_url)
            .field(
                "admin_token",
                &self.admin_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration with just an API host (no token, no storage URL).
    #[must_use]
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            storage_url: None,
            admin_token: None,
        }
    }

    /// Set the admin bearer token.
    #[must_use]
    pub fn with_admin_token(mut self, token: SecretString) -> Self {
        self.admin_token = Some(token);
        self
    }

    /// Set the storage base URL for image path resolution.
    #[must_use]
    pub fn with_storage_url(mut self, url: Url) -> Self {
        self.storage_url = Some(url);
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API host is missing or the storage URL
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_host = get_env_with_fallback("WISATA_API_HOST", "API_HOST")?;
        let storage_url = match get_optional_with_fallback("WISATA_STORAGE_URL", "STORAGE_URL") {
            Some(raw) => Some(Url::parse(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("WISATA_STORAGE_URL".to_string(), e.to_string())
            })?),
            None => None,
        };
        let admin_token = std::env::var("WISATA_ADMIN_TOKEN").ok().map(SecretString::from);

        Ok(Self {
            api_host,
            storage_url,
            admin_token,
        })
    }

    /// Resolve an image path against the storage base URL.
    ///
    /// Absolute URLs pass through untouched; relative paths are joined onto
    /// `storage_url`. Without a storage URL, paths also pass through.
    #[must_use]
    pub fn resolve_image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        self.storage_url.as_ref().map_or_else(
            || path.to_string(),
            |base| {
                base.join(path.trim_start_matches('/'))
                    .map_or_else(|_| path.to_string(), |joined| joined.to_string())
            },
        )
    }
}

/// Get an environment variable, trying a primary key then a generic fallback.
fn get_env_with_fallback(primary: &str, fallback: &str) -> Result<String, ConfigError> {
    get_optional_with_fallback(primary, fallback)
        .ok_or_else(|| ConfigError::MissingEnvVar(primary.to_string()))
}

fn get_optional_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .ok()
}
