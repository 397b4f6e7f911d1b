use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub caches: CacheSizes,
}

/// Entradas actualmente memoizadas por fetcher.
#[derive(Debug, Serialize)]
pub struct CacheSizes {
    pub variables: u64,
    pub dataset: u64,
}

impl HealthResponse {
    pub fn up(caches: CacheSizes) -> Self {
        Self {
            status: "UP".to_string(),
            caches,
        }
    }
}

/// Handler for GET /health. Never calls the Census API.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::up(CacheSizes {
        variables: state.variables().entry_count(),
        dataset: state.dataset().entry_count(),
    }))
}
