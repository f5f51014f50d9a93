use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqliteConfig;
use crate::common::{retry, retry_with_backoff, RetryConfig};

/// Connect to a SQLite database with default pool settings.
///
/// # Example
/// ```ignore
/// let db = database::sqlite::connect("sqlite://db/catalog.sqlite3?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqliteConfig::new(database_url)).await
}

/// Connect using a SqliteConfig.
///
/// This is the recommended way to connect when using configuration.
pub async fn connect_from_config(config: SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    let options: ConnectOptions = config.into_connect_options();
    let db = Database::connect(options).await?;

    info!("Successfully connected to SQLite database");

    Ok(db)
}

/// Connect to SQLite with automatic retry on failure.
///
/// Uses exponential backoff to retry connection attempts. Useful for
/// handling transient filesystem issues during startup.
pub async fn connect_with_retry(
    database_url: &str,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    connect_from_config_with_retry(SqliteConfig::new(database_url), retry_config).await
}

/// Connect from config with automatic retry on failure.
pub async fn connect_from_config_with_retry(
    config: SqliteConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    match retry_config {
        Some(rc) => retry_with_backoff(|| connect_from_config(config.clone()), rc).await,
        None => retry(|| connect_from_config(config.clone())).await,
    }
}

/// Run all pending migrations for the given migrator.
///
/// # Example
/// ```ignore
/// database::sqlite::run_migrations::<migration::Migrator>(&db, "catalog-api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_in_memory() {
        let db = connect("sqlite::memory:").await.unwrap();
        assert!(db.ping().await.is_ok());
    }

    #[tokio::test]
    async fn connect_invalid_url_fails() {
        let result = connect("not-a-dsn").await;
        assert!(result.is_err());
    }
}
