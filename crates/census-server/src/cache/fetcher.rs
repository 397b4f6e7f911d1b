//! Memoized upstream fetcher backed by Moka.

use std::sync::Arc;
use std::time::Duration;

use census_client::CensusSource;
use moka::future::Cache;
use moka::policy::EvictionPolicy;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::cache::entry::CacheEntry;
use crate::cache::keys::CacheKey;
use crate::cache::staleness::StalenessGate;
use crate::metrics::CacheMetrics;

/// Configuracion de un fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Maximo numero de argument tuples memoizados (default: 32)
    pub capacity: u64,
    /// Tiempo que una entry se considera fresca (default: 60 minutos)
    pub ttl: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            capacity: 32,
            ttl: Duration::from_secs(60 * 60),
        }
    }
}

/// Read-through cache in front of one family of Census calls.
///
/// Each distinct [`CacheKey`] owns one slot holding the last upstream outcome,
/// successful or not. Every lookup, including the one that just loaded the
/// slot, goes through the [`StalenessGate`]; an expired or errored slot is
/// refetched once and that second outcome is returned. A refetch only touches
/// its own key. Concurrent misses on the same key share one upstream call.
/// Once full, the least recently used key is evicted.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use census_client::{CensusClientConfig, HttpCensusSource};
/// use census_server::cache::{CacheKey, FetcherConfig, MemoizedFetcher};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let source = Arc::new(HttpCensusSource::new(CensusClientConfig::default())?);
/// let fetcher = MemoizedFetcher::new("variables", source, FetcherConfig::default());
///
/// let entry = fetcher.fetch(CacheKey::variables(2014)).await;
/// println!("errored: {}", entry.errored());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MemoizedFetcher {
    name: &'static str,
    source: Arc<dyn CensusSource>,
    inner: Cache<CacheKey, Arc<CacheEntry>>,
    gate: StalenessGate,
    metrics: CacheMetrics,
}

impl MemoizedFetcher {
    /// Crea un fetcher nuevo con la configuracion dada.
    pub fn new(name: &'static str, source: Arc<dyn CensusSource>, config: FetcherConfig) -> Self {
        let metrics = CacheMetrics::new(name);

        // Listener para evictions
        let eviction_metrics = metrics.clone();
        let inner = Cache::builder()
            .name(name)
            .max_capacity(config.capacity)
            .eviction_policy(EvictionPolicy::lru())
            .eviction_listener(move |_key, _value, cause| {
                let reason = match cause {
                    moka::notification::RemovalCause::Expired => "ttl",
                    moka::notification::RemovalCause::Size => "capacity",
                    moka::notification::RemovalCause::Explicit => "explicit",
                    moka::notification::RemovalCause::Replaced => "replaced",
                };
                eviction_metrics.record_eviction(reason);
            })
            .build();

        Self {
            name,
            source,
            inner,
            gate: StalenessGate::new(config.ttl),
            metrics,
        }
    }

    /// Returns the memoized outcome for `key`.
    ///
    /// Calls upstream on a miss. If the stored or freshly loaded entry is
    /// expired or errored, the key is dropped and loaded exactly once more;
    /// that outcome is returned even when it failed again.
    pub async fn fetch(&self, key: CacheKey) -> Arc<CacheEntry> {
        let (entry, cached) = match self.inner.get(&key).await {
            Some(entry) => (entry, true),
            None => {
                debug!(fetcher = self.name, key = %key, "Cache miss");
                self.metrics.record_miss();
                (self.load_shared(&key).await, false)
            },
        };

        let freshness = self.gate.check(&entry);
        if freshness.is_fresh() {
            if cached {
                debug!(fetcher = self.name, key = %key, "Cache hit");
                self.metrics.record_hit();
            }
            return entry;
        }

        info!(
            fetcher = self.name,
            key = %key,
            reason = freshness.as_str(),
            "Refreshing stale cache entry"
        );
        self.metrics.record_refresh(freshness.as_str());
        self.inner.invalidate(&key).await;
        self.load_shared(&key).await
    }

    /// Carga `key` via `get_with`: misses concurrentes comparten un solo load.
    async fn load_shared(&self, key: &CacheKey) -> Arc<CacheEntry> {
        let entry = self.inner.get_with(key.clone(), self.load(key)).await;
        self.metrics.update_entry_count(self.inner.entry_count());
        entry
    }

    async fn load(&self, key: &CacheKey) -> Arc<CacheEntry> {
        let start = Instant::now();
        let outcome = match key {
            CacheKey::Variables { year } => self.source.variables(*year).await,
            CacheKey::Dataset { year, headers } => self.source.dataset(*year, headers).await,
        };
        self.metrics.record_upstream_duration(start.elapsed());

        if let Err(error) = &outcome {
            warn!(
                fetcher = self.name,
                source = self.source.name(),
                endpoint = key.kind(),
                year = key.year(),
                kind = error.kind(),
                error = %error,
                "Upstream call failed"
            );
            self.metrics.record_upstream_error(error.kind());
        }

        Arc::new(CacheEntry::from_outcome(key, outcome, Instant::now()))
    }

    /// Returns the stored entry without staleness checks, metrics or upstream calls.
    pub async fn peek(&self, key: &CacheKey) -> Option<Arc<CacheEntry>> {
        self.inner.get(key).await
    }

    /// Stores an entry directly, replacing any existing one.
    pub async fn insert(&self, key: CacheKey, entry: CacheEntry) {
        self.inner.insert(key, Arc::new(entry)).await;
    }

    /// Invalida una entrada especifica.
    pub async fn invalidate(&self, key: &CacheKey) {
        self.inner.invalidate(key).await;
    }

    /// Invalida todas las entradas.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Retorna el numero aproximado de entries en cache.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Applies pending evictions and invalidations so counts are exact.
    pub async fn run_pending_tasks(&self) {
        self.inner.run_pending_tasks().await;
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Retorna las metricas para acceso externo.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}
