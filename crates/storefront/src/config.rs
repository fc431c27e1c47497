//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHUBH_BACKEND_URL` - Base URL of the catalog backend (default: <http://localhost:8000>)
//! - `SHUBH_HOST` - Bind address (default: 127.0.0.1)
//! - `SHUBH_PORT` - Listen port (default: 3000)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// Default backend base URL when `SHUBH_BACKEND_URL` is unset.
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the backend catalog API
    pub backend_url: Url,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a default, so a bare environment is valid.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SHUBH_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHUBH_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SHUBH_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHUBH_PORT".to_string(), e.to_string()))?;
        let backend_url = Url::parse(&get_env_or_default("SHUBH_BACKEND_URL", DEFAULT_BACKEND_URL))
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SHUBH_BACKEND_URL".to_string(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            backend_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
