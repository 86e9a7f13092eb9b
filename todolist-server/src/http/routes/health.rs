//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
}

/// GET /health
///
/// Always answers 200; `store` reports whether the item store is reachable.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = match state.resolver.item_store().count_all().await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!("Health check: store unavailable: {}", e);
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: "ok",
        store,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
