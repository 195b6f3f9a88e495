//! Items API routes
//!
//! Wires the items domain to the backend selected in configuration.

use axum::Router;
use domain_items::{
    InMemoryItemRepository, ItemService, JsonFileItemRepository, StoreBackend, StoreConfig,
    handlers,
};
use tracing::info;

/// Create items router
pub async fn router(config: &StoreConfig) -> eyre::Result<Router> {
    let router = match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory item store");
            handlers::router(ItemService::new(InMemoryItemRepository::new()))
        }
        StoreBackend::File => {
            info!(path = %config.data_file.display(), "Using JSON file item store");
            let repository = JsonFileItemRepository::open(&config.data_file)
                .await
                .map_err(|e| eyre::eyre!("Failed to open item store: {}", e))?;
            handlers::router(ItemService::new(repository))
        }
    };

    Ok(router)
}
