//! Type-safe configuration loading from environment variables
//!
//! This module provides utilities for loading configuration from
//! environment variables and `.env` files

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::database::DatabaseConfig;

/// Load environment variables from `.env` files if it exists.
///
/// Call this at the start of your application before accessing config.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Get a required environment variable.
///
/// Returns an error if the variable is not set.
pub fn get_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key.to_string()))
}

/// Get an optional environment with a default value
pub fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable with a default.
pub fn get_env_parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Runtime configuration for the service binary.
///
/// Loaded once at startup from the environment:
///
/// ```bash
/// TODO_GRPC_HOST=127.0.0.1   # default
/// TODO_GRPC_PORT=50051       # default
/// # plus the DATABASE_* variables, see `database::DatabaseConfig`
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the gRPC listener binds to.
    pub bind_addr: SocketAddr,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads the full configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = get_env_or("TODO_GRPC_HOST", "127.0.0.1");
        let port: u16 = get_env_parsed_or("TODO_GRPC_PORT", 50051);
        let bind_addr = format!("{host}:{port}")
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: "TODO_GRPC_HOST".to_string(),
                value: format!("{host}:{port}"),
            })?;

        Ok(Self {
            bind_addr,
            database: DatabaseConfig::from_env(),
        })
    }
}

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Environment variable is not set.
    Missing(String),
    /// Environment variable value is invalid.
    Invalid { key: String, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => {
                write!(f, "Missing required environment variable '{}'", key)
            }
            ConfigError::Invalid { key, value } => {
                write!(
                    f,
                    "Invalid value '{}' for environment variable '{}' (failed to parse as expected type)",
                    value, key
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_missing() {
        let result = get_env("TODO_GRPC_TEST_MISSING_VAR_12345");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_env_or_default() {
        let value = get_env_or("TODO_GRPC_TEST_MISSING_VAR_12345", "default");
        assert_eq!(value, "default");
    }

    #[test]
    fn test_get_env_parsed_or_default() {
        let value: u16 = get_env_parsed_or("TODO_GRPC_TEST_MISSING_VAR_12345", 50051);
        assert_eq!(value, 50051);
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_env().expect("defaults should parse");
        assert_eq!(config.bind_addr.port(), 50051);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Missing("DATABASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable 'DATABASE_URL'"
        );

        let err = ConfigError::Invalid {
            key: "TODO_GRPC_PORT".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'abc' for environment variable 'TODO_GRPC_PORT' (failed to parse as expected type)"
        );
    }
}
