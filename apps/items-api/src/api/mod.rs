//! API routes module

pub mod items;
pub mod root;

use axum::Router;
use domain_items::StoreConfig;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub async fn routes(store: &StoreConfig) -> eyre::Result<Router> {
    Ok(Router::new().nest("/items", items::router(store).await?))
}
