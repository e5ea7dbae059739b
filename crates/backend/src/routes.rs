use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;

/// All application routes. The frontend build is served from `dist` as
/// the fallback for anything outside `/api`.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Warehouse table browser
        .route(
            "/api/warehouse/:table",
            get(handlers::warehouse::get_table),
        )
        .route(
            "/api/warehouse/:table/csv",
            get(handlers::warehouse::export_csv),
        )
        .route(
            "/api/warehouse/cache/clear",
            post(handlers::warehouse::clear_cache),
        )
        .fallback_service(ServeDir::new("dist"))
}
