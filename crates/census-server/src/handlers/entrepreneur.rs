//! Annual Survey of Entrepreneurs endpoint handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::cache::{CacheEntry, CacheKey, FetchResult};
use crate::error::AppError;
use crate::extractors::{HeadersQuery, YearPath};
use crate::state::AppState;

/// Handler for GET /api/entrepreneur/variables/{year}.
///
/// Lists the variables of the survey year, without the `for`/`in`/`ucgid`
/// pseudo-variables.
#[instrument(skip_all, fields(year = path.year))]
pub async fn get_variables(
    State(state): State<AppState>,
    Path(path): Path<YearPath>,
) -> Result<Response, AppError> {
    let entry = state.variables().fetch(CacheKey::variables(path.year)).await;
    respond(&entry)
}

/// Handler for GET /api/entrepreneur/{year}?headers=A&headers=B.
///
/// Headers default to `NAME` and `NATION` and are sorted before the cache
/// lookup, so the order they are given in does not matter.
#[instrument(skip_all, fields(year = path.year))]
pub async fn get_dataset(
    State(state): State<AppState>,
    Path(path): Path<YearPath>,
    headers: HeadersQuery,
) -> Result<Response, AppError> {
    headers.validate().map_err(AppError::BadRequest)?;

    let key = CacheKey::dataset(path.year, headers.into_inner());
    tracing::debug!(key = %key, "Fetching dataset");

    let entry = state.dataset().fetch(key).await;
    respond(&entry)
}

fn respond(entry: &CacheEntry) -> Result<Response, AppError> {
    match entry.result() {
        FetchResult::Records(records) => Ok(Json(records).into_response()),
        FetchResult::Failed(payload) => Err(AppError::Upstream(payload.clone())),
    }
}
