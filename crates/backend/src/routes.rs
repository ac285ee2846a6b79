use axum::{routing::get, Router};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Dictionary handlers
        .route("/api/dictionaries", get(handlers::dictionaries::list_all))
        .route(
            "/api/dictionaries/:code",
            get(handlers::dictionaries::get_entries),
        )
}
