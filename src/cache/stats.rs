//! Cache Statistics Module
//!
//! Hit/miss/eviction counters, for observability only.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing how the cache has behaved so far.
///
/// Never consulted on the correctness path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups served from an unexpired entry
    pub hits: u64,
    /// Lookups that went to the search backend (absent or expired entry)
    pub misses: u64,
    /// Entries removed to enforce the size bound
    pub evictions: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, 0.0 if none were made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
