//! Database library providing the SQLite connector used by the catalog.
//!
//! # Examples
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::sqlite::{SqliteConfig, connect_from_config_with_retry, run_migrations};
//!
//! let config = SqliteConfig::from_env()?;
//! let db = connect_from_config_with_retry(config, None).await?;
//! run_migrations::<migration::Migrator>(&db, "catalog-api").await?;
//! ```

pub mod common;
pub mod sqlite;

pub use sea_orm::DatabaseConnection;
