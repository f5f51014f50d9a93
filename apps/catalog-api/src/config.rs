use core_config::{env_or_default, server::ServerConfig, ConfigError, FromEnv};
use database::sqlite::SqliteConfig;
use std::path::PathBuf;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Which item store backend to run against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// SQLite via SeaORM (default)
    Sqlite,
    /// Single JSON document on disk
    Json,
}

impl FromEnv for StoreBackend {
    fn from_env() -> Result<Self, ConfigError> {
        let value = env_or_default("ITEM_STORE", "sqlite");
        match value.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "json" => Ok(StoreBackend::Json),
            other => Err(ConfigError::ParseError {
                key: "ITEM_STORE".to_string(),
                details: format!("expected 'sqlite' or 'json', got '{}'", other),
            }),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the core_config library
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub environment: Environment,
    pub store: StoreBackend,
    pub database: SqliteConfig,
    /// Path of the JSON items document (file-backed store only)
    pub items_file: PathBuf,
    /// Directory holding stored images and the placeholder
    pub image_dir: PathBuf,
    /// CORS allowed origin for the frontend
    pub allowed_origin: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=9000
        let store = StoreBackend::from_env()?;
        let database = SqliteConfig::from_env()?;
        let items_file = PathBuf::from(env_or_default("ITEMS_FILE", "items.json"));
        let image_dir = PathBuf::from(env_or_default("IMAGE_DIR", "images"));
        let allowed_origin = env_or_default("FRONT_URL", "http://localhost:3000");

        Ok(Self {
            server,
            environment,
            store,
            database,
            items_file,
            image_dir,
            allowed_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_sqlite_and_local_origin() {
        temp_env::with_vars(
            [
                ("ITEM_STORE", None::<&str>),
                ("FRONT_URL", None),
                ("ITEMS_FILE", None),
                ("IMAGE_DIR", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.store, StoreBackend::Sqlite);
                assert_eq!(config.allowed_origin, "http://localhost:3000");
                assert_eq!(config.items_file, PathBuf::from("items.json"));
                assert_eq!(config.image_dir, PathBuf::from("images"));
                assert_eq!(config.server.port, 9000);
            },
        );
    }

    #[test]
    fn json_backend_is_selectable() {
        temp_env::with_var("ITEM_STORE", Some("json"), || {
            assert_eq!(StoreBackend::from_env().unwrap(), StoreBackend::Json);
        });
    }

    #[test]
    fn unknown_backend_is_rejected() {
        temp_env::with_var("ITEM_STORE", Some("mongodb"), || {
            assert!(StoreBackend::from_env().is_err());
        });
    }
}
