use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::InMemoryItemRepository;
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, StorageBackend};
use state::{AppState, Storage};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let storage = match (config.storage, config.database.clone()) {
        (StorageBackend::Postgres, Some(database)) => {
            info!("Using PostgreSQL item store");
            let db = database::postgres::connect_from_config_with_retry(database, None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            database::postgres::run_migrations::<Migrator>(&db, config.app.name)
                .await
                .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

            Storage::Postgres(db)
        }
        (StorageBackend::Postgres, None) => {
            eyre::bail!("STORAGE_BACKEND=postgres requires DATABASE_URL")
        }
        (StorageBackend::Memory, _) => {
            info!("Using in-memory item store; data is lost on restart");
            Storage::Memory(InMemoryItemRepository::new())
        }
    };

    let state = AppState { config, storage };
    let app = api::app(&state)?;

    info!("Starting Items REST API with graceful shutdown (30s timeout)");

    // Storage moves into the cleanup future
    let AppState { config, storage } = state;
    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            if let Storage::Postgres(db) = storage {
                info!("Shutting down: closing database connections");
                match db.close().await {
                    Ok(_) => info!("PostgreSQL connection closed successfully"),
                    Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
                }
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items REST API shutdown complete");
    Ok(())
}
