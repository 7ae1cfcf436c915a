//! Database configuration and connection pooling.
//!
//! The service stores to-do items in SQLite through SeaORM. Connection
//! settings are environment-aware with sensible defaults, so a bare
//! `cargo run` provisions a local file database:
//!
//! ```bash
//! DATABASE_URL=sqlite://todo_grpc.db?mode=rwc   # default
//!
//! # Optional pool tuning
//! DATABASE_MAX_CONNECTIONS=10
//! DATABASE_MIN_CONNECTIONS=1
//! DATABASE_CONNECT_TIMEOUT=30   # seconds
//! DATABASE_IDLE_TIMEOUT=600     # seconds
//! DATABASE_LOGGING=true         # SQL statement logging
//! ```

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::{get_env_or, get_env_parsed_or};

/// Used when `DATABASE_URL` is not set; `mode=rwc` creates the file on
/// first connect.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todo_grpc.db?mode=rwc";

/// Database configuration with environment-aware defaults.
///
/// Use [`DatabaseConfig::from_env`] to load from environment variables,
/// or build manually for testing.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool (default: 10).
    pub max_connections: u32,
    /// Minimum number of connections to keep open (default: 1).
    pub min_connections: u32,
    /// Connection timeout in seconds (default: 30).
    pub connect_timeout: u64,
    /// Idle connection timeout in seconds (default: 600).
    pub idle_timeout: u64,
    /// Enable SQL query logging (default: true in debug, false in release).
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given URL and defaults.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: 30,
            idle_timeout: 600,
            sqlx_logging: cfg!(debug_assertions),
        }
    }

    /// Loads configuration from environment variables, falling back to the
    /// local SQLite default when `DATABASE_URL` is not set.
    pub fn from_env() -> Self {
        Self {
            url: get_env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections: get_env_parsed_or("DATABASE_MAX_CONNECTIONS", 10),
            min_connections: get_env_parsed_or("DATABASE_MIN_CONNECTIONS", 1),
            connect_timeout: get_env_parsed_or("DATABASE_CONNECT_TIMEOUT", 30),
            idle_timeout: get_env_parsed_or("DATABASE_IDLE_TIMEOUT", 600),
            sqlx_logging: get_env_parsed_or("DATABASE_LOGGING", cfg!(debug_assertions)),
        }
    }

    /// Sets the maximum number of connections in the pool.
    pub fn max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }

    /// Sets the minimum number of connections in the pool.
    pub fn min_connections(mut self, n: u32) -> Self {
        self.min_connections = n;
        self
    }

    /// Sets the connection timeout in seconds.
    pub fn connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout = secs;
        self
    }

    /// Sets the idle connection timeout in seconds.
    pub fn idle_timeout(mut self, secs: u64) -> Self {
        self.idle_timeout = secs;
        self
    }

    /// Enables or disables SQL query logging.
    pub fn sqlx_logging(mut self, enabled: bool) -> Self {
        self.sqlx_logging = enabled;
        self
    }

    /// Connects to the database and returns a connection pool.
    pub async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let mut opts = ConnectOptions::new(&self.url);
        opts.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout))
            .idle_timeout(Duration::from_secs(self.idle_timeout))
            .sqlx_logging(self.sqlx_logging);

        Database::connect(opts).await
    }
}
