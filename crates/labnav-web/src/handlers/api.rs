//! JSON API: health, navigation snapshot, and the backend proxy.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::backend::QueryRequest;
use crate::error::WebError;
use crate::routes::RouteEntry;
use crate::state::{AppEvent, SharedState};

/// GET /api/health
pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "time": chrono::Utc::now().to_rfc3339(),
        "service": state.config.branding.title,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Serialize)]
pub struct NavigationSnapshot {
    pub current_path: &'static str,
    pub active: RouteEntry,
    pub routes: Vec<RouteEntry>,
}

/// GET /api/navigation
pub async fn navigation(
    State(state): State<SharedState>,
) -> Result<Json<NavigationSnapshot>, WebError> {
    let nav = state.lock_nav()?;
    Ok(Json(NavigationSnapshot {
        current_path: nav.current_path(),
        active: nav.active_entry().clone(),
        routes: nav.routes().entries().to_vec(),
    }))
}

/// GET /api/backend/health
pub async fn backend_health(State(state): State<SharedState>) -> Result<Json<Value>, WebError> {
    match state.backend.health().await {
        Ok(body) => {
            state.publish(AppEvent::BackendStatus {
                reachable: true,
                message: "ok".to_string(),
            });
            Ok(Json(body))
        }
        Err(err) => {
            tracing::warn!(error = %err, "Backend health check failed");
            state.publish(AppEvent::BackendStatus {
                reachable: false,
                message: err.to_string(),
            });
            Err(err.into())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryBody {
    pub query: String,
    pub doc_type: Option<String>,
    pub use_cache: Option<bool>,
}

/// POST /api/query — validates the filter and forwards to the backend.
pub async fn query(
    State(state): State<SharedState>,
    Json(body): Json<QueryBody>,
) -> Result<Json<Value>, WebError> {
    let query = body.query.trim();
    if query.is_empty() {
        return Err(WebError::BadRequest("query must not be empty".to_string()));
    }
    let doc_type = body
        .doc_type
        .as_deref()
        .map(|raw| state.doc_types.parse(raw))
        .transpose()?;

    let request = QueryRequest {
        query: query.to_string(),
        doc_type,
        use_cache: body.use_cache,
    };
    Ok(Json(state.backend.query(&request).await?))
}
