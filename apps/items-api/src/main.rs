use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(
        environment = ?config.environment,
        store = %config.store.backend,
        "Starting {} v{}",
        config.app.name,
        config.app.version
    );

    // Build router with API routes
    let api_routes = api::routes(&config.store).await?;

    // Create a router with OpenAPI docs, landing page and health check
    let router = axum_helpers::create_router::<openapi::ApiDoc>(
        api_routes,
        api::root::router(config.app),
        &config.server,
    )?;

    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("CRUD Demo API shutdown complete");
    Ok(())
}
