//! Tracing setup for the server binary.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::get_env_parsed_or;

/// Configuration for the tracing/logging system.
///
/// `RUST_LOG` takes precedence over the configured level when set.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Output logs as JSON.
    pub json: bool,
    /// The minimum log level.
    pub level: Level,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            json: false,
            level: Level::INFO,
        }
    }
}

impl TracingConfig {
    /// Creates a new tracing configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration from the environment (`LOG_JSON`).
    pub fn from_env() -> Self {
        Self {
            json: get_env_parsed_or("LOG_JSON", false),
            level: Level::INFO,
        }
    }

    /// Enables or disables JSON output format.
    pub fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Sets the minimum log level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Initializes the global tracing subscriber with this configuration.
    pub fn init(self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string()));

        if self.json {
            fmt().with_env_filter(filter).json().init();
        } else {
            fmt().with_env_filter(filter).init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_config_default() {
        let config = TracingConfig::default();
        assert!(!config.json);
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn test_tracing_config_builder() {
        let config = TracingConfig::new().json(true).level(Level::DEBUG);
        assert!(config.json);
        assert_eq!(config.level, Level::DEBUG);
    }
}
