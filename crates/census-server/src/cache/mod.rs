//! Cache module for the Census proxy.
//!
//! Memoizes upstream calls per normalized argument tuple. Each entry keeps
//! the result together with when it was fetched and whether the call failed;
//! the staleness gate uses both to decide when to refetch a single key.

pub mod entry;
pub mod fetcher;
pub mod keys;
pub mod staleness;

// Re-exports
pub use entry::{CacheEntry, FetchResult};
pub use fetcher::{FetcherConfig, MemoizedFetcher};
pub use keys::{CacheKey, DEFAULT_DATASET_HEADERS};
pub use staleness::{Freshness, StalenessGate};
