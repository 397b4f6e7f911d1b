//! Application state.

use std::sync::Arc;

use census_client::CensusSource;

use crate::cache::{FetcherConfig, MemoizedFetcher};

/// Application state shared across all handlers.
///
/// Each endpoint family gets its own fetcher, so each has its own capacity.
#[derive(Clone)]
pub struct AppState {
    variables: MemoizedFetcher,
    dataset: MemoizedFetcher,
}

impl AppState {
    /// Creates the state for a Census source, one fetcher per endpoint.
    pub fn new(source: Arc<dyn CensusSource>, config: FetcherConfig) -> Self {
        Self {
            variables: MemoizedFetcher::new("variables", Arc::clone(&source), config.clone()),
            dataset: MemoizedFetcher::new("dataset", source, config),
        }
    }

    /// Fetcher for GET /api/entrepreneur/variables/{year}.
    pub fn variables(&self) -> &MemoizedFetcher {
        &self.variables
    }

    /// Fetcher for GET /api/entrepreneur/{year}.
    pub fn dataset(&self) -> &MemoizedFetcher {
        &self.dataset
    }
}
