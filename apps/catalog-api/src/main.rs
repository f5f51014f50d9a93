use axum::Router;
use axum_helpers::{create_app, create_cors_layer, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_images::{handlers as image_handlers, ImageResolver, ImageService};
use domain_items::{
    handlers as item_handlers, ItemService, JsonFileItemRepository, SqliteItemRepository,
};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::{Config, StoreBackend};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let items_router = match config.store {
        StoreBackend::Sqlite => {
            let db =
                database::sqlite::connect_from_config_with_retry(config.database.clone(), None)
                    .await
                    .map_err(|e| eyre::eyre!("SQLite connection failed: {}", e))?;
            database::sqlite::run_migrations::<migration::Migrator>(&db, env!("CARGO_PKG_NAME"))
                .await
                .map_err(|e| eyre::eyre!("Database migration failed: {}", e))?;

            item_handlers::router(ItemService::new(SqliteItemRepository::new(db)))
        }
        StoreBackend::Json => {
            info!(
                "Using file-backed item store at {}",
                config.items_file.display()
            );
            item_handlers::router(ItemService::new(JsonFileItemRepository::new(
                &config.items_file,
            )))
        }
    };

    let image_service = ImageService::new(ImageResolver::new(&config.image_dir));

    let routes = Router::new()
        .merge(api::router())
        .merge(health_router(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        ))
        .nest("/items", items_router)
        .nest("/image", image_handlers::router(image_service));

    let origin = config.allowed_origin.parse().map_err(|e| {
        eyre::eyre!(
            "Invalid FRONT_URL origin '{}': {}",
            config.allowed_origin,
            e
        )
    })?;

    let router = create_router::<openapi::ApiDoc>(routes, create_cors_layer(origin));

    create_app(router, &config.server.address()).await?;

    Ok(())
}
