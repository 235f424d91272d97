//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CREWLIST_HOST` - Bind address (default: 127.0.0.1)
//! - `CREWLIST_PORT` - Listen port (default: 3000)
//! - `CREWLIST_API_URL` - Remote directory API base URL
//!   (default: <https://jsonplaceholder.typicode.com>)
//! - `CREWLIST_STORE_PATH` - JSON slot holding locally-added users
//!   (default: data/added_users.json)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

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

/// Crewlist application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the remote read-only directory API
    pub api_url: Url,
    /// Path of the JSON file slot holding locally-added users
    pub store_path: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid
    /// (unparseable address, port, or API URL).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CREWLIST_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CREWLIST_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CREWLIST_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CREWLIST_PORT".to_string(), e.to_string()))?;
        let api_url = Url::parse(&get_env_or_default(
            "CREWLIST_API_URL",
            "https://jsonplaceholder.typicode.com",
        ))
        .map_err(|e| ConfigError::InvalidEnvVar("CREWLIST_API_URL".to_string(), e.to_string()))?;
        let store_path =
            PathBuf::from(get_env_or_default("CREWLIST_STORE_PATH", "data/added_users.json"));
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            api_url,
            store_path,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_combines_host_and_port() {
        let config = AppConfig {
            host: "127.0.0.1".parse().expect("valid addr"),
            port: 4000,
            api_url: Url::parse("http://localhost:1").expect("valid url"),
            store_path: PathBuf::from("data/added_users.json"),
            sentry_dsn: None,
            sentry_environment: None,
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4000");
    }
}
