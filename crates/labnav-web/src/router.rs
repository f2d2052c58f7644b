//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    pages::page,
    api::{health, navigation, backend_health, query},
};
use crate::sse::sse_handler;

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);
    let static_dir = shared.config.server.static_dir.clone();

    // Pages, one per route table entry
    let mut router: Router<SharedState> = Router::new();
    for entry in shared.routes.entries() {
        router = router.route(entry.path, get(page));
    }

    router
        // SSE streaming
        .route("/api/events", get(sse_handler))

        // API endpoints
        .route("/api/health",         get(health))
        .route("/api/navigation",     get(navigation))
        .route("/api/backend/health", get(backend_health))
        .route("/api/query",          post(query))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Unknown paths go through the page handler's not-found policy
        .fallback(page)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
