mod config;
mod connector;

pub use config::SqliteConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
    run_migrations,
};
pub use sea_orm::DatabaseConnection;
