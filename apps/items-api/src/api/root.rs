//! Top-level routes outside `/api`

use axum::{Router, routing::get};
use axum_helpers::health_router;
use core_config::AppInfo;

pub const LANDING_MESSAGE: &str = "CRUD Demo API is running! Access the API at /api/items";

/// Landing page and health probe
pub fn router(app: AppInfo) -> Router {
    Router::new()
        .route("/", get(landing))
        .merge(health_router(app))
}

async fn landing() -> &'static str {
    LANDING_MESSAGE
}
