//! Runtime configuration
//!
//! Sourced from the environment: the store connection string, the listen
//! address, and CORS origins. Everything except the connection string has
//! a default.

use std::env;

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The store connection string is required to serve.
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    /// An environment variable held a value that does not parse.
    #[error("invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Store connection string (`DATABASE_URL`).
    pub database_url: Option<String>,

    /// Host to bind to (`HOST`, default "0.0.0.0").
    pub host: String,

    /// Port to bind to (`PORT`, default 3000).
    pub port: u16,

    /// CORS allowed origins (`CORS_ORIGINS`, comma separated). Empty means
    /// permissive.
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "PORT",
                    value,
                })?,
            Err(_) => default_port(),
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok(),
            host: env::var("HOST").unwrap_or_else(|_| default_host()),
            port,
            cors_origins,
        })
    }

    /// Create a config with the specified port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// The connection string, or an error when serving without one.
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::MissingDatabaseUrl)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.database_url.is_none());
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_require_database_url() {
        let config = AppConfig::default();
        assert!(matches!(
            config.require_database_url(),
            Err(ConfigError::MissingDatabaseUrl)
        ));

        let config = AppConfig {
            database_url: Some("postgres://localhost/contacts".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.require_database_url().unwrap(),
            "postgres://localhost/contacts"
        );
    }
}
