//! Cache and upstream metrics recording.

use metrics::{counter, gauge, histogram};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Describe las metricas de cache.
/// Llamar una vez al inicio.
pub fn register_cache_metrics() {
    metrics::describe_counter!("census_cache_hits_total", "Total number of fresh cache hits");
    metrics::describe_counter!("census_cache_misses_total", "Total number of cache misses");
    metrics::describe_counter!(
        "census_cache_refreshes_total",
        "Cache entries refetched because they were expired or errored"
    );
    metrics::describe_counter!(
        "census_cache_evictions_total",
        "Total number of cache evictions"
    );
    metrics::describe_gauge!("census_cache_entries", "Current number of entries in cache");
    metrics::describe_counter!(
        "census_upstream_errors_total",
        "Failed calls to the Census API by failure kind"
    );
    metrics::describe_histogram!(
        "census_upstream_request_seconds",
        "Time spent waiting on the Census API"
    );
}

/// Recorder de metricas para un fetcher.
/// Cada serie lleva el label `fetcher`; los contadores internos sirven para tests y logging.
#[derive(Debug, Clone)]
pub struct CacheMetrics {
    fetcher: &'static str,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    refreshes: Arc<AtomicU64>,
}

impl CacheMetrics {
    pub fn new(fetcher: &'static str) -> Self {
        Self {
            fetcher,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
            refreshes: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Registra un cache hit
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        counter!("census_cache_hits_total", "fetcher" => self.fetcher).increment(1);
    }

    /// Registra un cache miss
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        counter!("census_cache_misses_total", "fetcher" => self.fetcher).increment(1);
    }

    /// Registra un refetch de una entry expirada o con error
    pub fn record_refresh(&self, reason: &'static str) {
        self.refreshes.fetch_add(1, Ordering::Relaxed);
        counter!(
            "census_cache_refreshes_total",
            "fetcher" => self.fetcher,
            "reason" => reason
        )
        .increment(1);
    }

    /// Registra una eviction
    pub fn record_eviction(&self, reason: &'static str) {
        counter!(
            "census_cache_evictions_total",
            "fetcher" => self.fetcher,
            "reason" => reason
        )
        .increment(1);
    }

    /// Registra una llamada fallida al Census API
    pub fn record_upstream_error(&self, kind: &'static str) {
        counter!(
            "census_upstream_errors_total",
            "fetcher" => self.fetcher,
            "kind" => kind
        )
        .increment(1);
    }

    /// Actualiza el gauge de entries
    pub fn update_entry_count(&self, count: u64) {
        gauge!("census_cache_entries", "fetcher" => self.fetcher).set(count as f64);
    }

    pub fn record_upstream_duration(&self, duration: Duration) {
        histogram!("census_upstream_request_seconds", "fetcher" => self.fetcher)
            .record(duration.as_secs_f64());
    }

    /// Calcula hit rate (para logging/debugging)
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64 + self.refreshes() as f64;
        if total == 0.0 { 0.0 } else { hits / total }
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn refreshes(&self) -> u64 {
        self.refreshes.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_counts_refreshes_as_lookups() {
        let metrics = CacheMetrics::new("variables");

        // 2 hits, 1 miss, 1 refresh = 50% hit rate
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();
        metrics.record_refresh("expired");

        assert!((metrics.hit_rate() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_counters_are_shared_between_clones() {
        let metrics = CacheMetrics::new("dataset");
        let clone = metrics.clone();

        clone.record_miss();
        clone.record_refresh("errored");

        assert_eq!(metrics.misses(), 1);
        assert_eq!(metrics.refreshes(), 1);
        assert_eq!(metrics.hits(), 0);
    }

    #[test]
    fn test_empty_hit_rate_is_zero() {
        assert_eq!(CacheMetrics::new("variables").hit_rate(), 0.0);
    }
}
