use core_config::{env_or_default, ConfigError, FromEnv};
use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

/// Default DSN; `mode=rwc` creates the database file if it does not exist.
const DEFAULT_URL: &str = "sqlite://db/catalog.sqlite3?mode=rwc";

/// SQLite database configuration
///
/// Holds connection pool settings for the catalog database. It can be
/// constructed manually or loaded from environment variables.
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Enable SQL query logging
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    /// Create a new SqliteConfig with default pool settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Convert into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url);
        options
            .max_connections(self.max_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Debug);
        options
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            max_connections: 10,
            connect_timeout_secs: 8,
            sqlx_logging: true,
        }
    }
}

impl FromEnv for SqliteConfig {
    /// Reads from environment variables:
    /// - DATABASE_URL: defaults to `sqlite://db/catalog.sqlite3?mode=rwc`
    /// - DATABASE_MAX_CONNECTIONS: defaults to 10
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_or_default("DATABASE_URL", DEFAULT_URL);
        let max_connections = env_or_default("DATABASE_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "DATABASE_MAX_CONNECTIONS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            url,
            max_connections,
            ..Self::default()
        })
    }
}
