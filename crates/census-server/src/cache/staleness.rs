//! Decides whether a memoized entry can still be served.

use std::time::Duration;

use tokio::time::Instant;

use crate::cache::entry::CacheEntry;

/// Outcome of checking one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Younger than the TTL and fetched without error.
    Fresh,
    /// Older than the TTL.
    Expired,
    /// The upstream call behind the entry failed.
    Errored,
}

impl Freshness {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh)
    }

    /// Label used for logs and the refresh counter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Expired => "expired",
            Self::Errored => "errored",
        }
    }
}

/// Time-to-live check applied to every entry a lookup is about to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessGate {
    ttl: Duration,
}

impl StalenessGate {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Checks `entry` as of `now`. An errored entry is never fresh; otherwise
    /// it expires once its age strictly exceeds the TTL.
    pub fn check_at(&self, entry: &CacheEntry, now: Instant) -> Freshness {
        if entry.errored() {
            return Freshness::Errored;
        }

        let age = now.saturating_duration_since(entry.timestamp());
        if age > self.ttl {
            Freshness::Expired
        } else {
            Freshness::Fresh
        }
    }

    pub fn check(&self, entry: &CacheEntry) -> Freshness {
        self.check_at(entry, Instant::now())
    }
}
