//! Cache invalidation endpoint handler.

use axum::{extract::State, response::Json};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

/// Response para operaciones de invalidacion.
#[derive(Debug, Serialize)]
pub struct InvalidateResponse {
    /// Numero de entries invalidadas.
    pub invalidated: u64,
    /// Mensaje descriptivo.
    pub message: String,
}

/// DELETE /api/entrepreneur/cache
/// Invalida las entries de ambos fetchers.
#[instrument(skip_all)]
pub async fn invalidate_all(State(state): State<AppState>) -> Json<InvalidateResponse> {
    let mut count = 0;
    for fetcher in [state.variables(), state.dataset()] {
        fetcher.run_pending_tasks().await;
        let entries = fetcher.entry_count();
        tracing::debug!(
            fetcher = fetcher.name(),
            entries = entries,
            hit_rate = fetcher.metrics().hit_rate(),
            "Dropping cache"
        );
        count += entries;
        fetcher.invalidate_all();
    }

    tracing::info!(count = count, "All cache entries invalidated");

    Json(InvalidateResponse {
        invalidated: count,
        message: format!("Invalidated all {} cache entries", count),
    })
}
