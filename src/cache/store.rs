//! Cache Store Module
//!
//! The search result cache itself: normalized-key lookup, TTL expiry,
//! FIFO eviction at capacity, and write-through of backend results.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::models::SearchResults;
use crate::search::ProductSearch;

// == Query Normalization ==
/// Normalizes a free-text query into a cache key (trim + lowercase), so that
/// `"Drill"`, `"drill "` and `" DRILL"` collide to the same entry.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Map state plus bookkeeping, guarded by one lock so that lookup and
/// insert+evict are each a single critical section.
#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    next_seq: u64,
    stats: CacheStats,
}

// == Search Result Cache ==
/// Time and size bounded memoization layer over a [`ProductSearch`] backend.
///
/// Lookups for a fresh entry (age < TTL) are served from memory; anything
/// else goes to the backend, and a successful result is written back. The
/// cache never holds more than `max_entries` entries: inserting a new key at
/// capacity evicts the entry that was inserted first (FIFO, not LRU - a hit
/// does not refresh insertion order).
///
/// Concurrent misses for the same key are not coalesced; both invoke the
/// backend and the last insert wins. The lock is never held across the
/// backend await, so map operations stay atomic relative to each other.
#[derive(Debug)]
pub struct SearchResultCache<S> {
    backend: S,
    max_entries: usize,
    ttl: Duration,
    inner: RwLock<Inner>,
}

impl<S: ProductSearch> SearchResultCache<S> {
    // == Constructor ==
    /// Creates a cache over `backend` holding at most `max_entries` entries,
    /// each served for at most `ttl` after insertion.
    pub fn new(backend: S, max_entries: usize, ttl: Duration) -> Self {
        Self {
            backend,
            max_entries,
            ttl,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Creates a cache with parameters taken from a [`CacheConfig`].
    pub fn from_config(backend: S, config: &CacheConfig) -> Self {
        Self::new(backend, config.max_entries, config.ttl())
    }

    // == Get Or Fetch ==
    /// Returns the product list for `query`, from the cache if a fresh entry
    /// exists, otherwise by invoking the search backend.
    ///
    /// The query is normalized (trim + lowercase) for the cache key, but the
    /// backend receives the original string. On a successful fetch the entry
    /// is inserted (overwriting any stale one) and the oldest entry is
    /// evicted if the cache would exceed its capacity. On a backend failure
    /// the error is propagated and the cache is left untouched - including
    /// any expired entry for the same key, which is neither served nor
    /// deleted.
    pub async fn get_or_fetch(&self, query: &str) -> Result<SearchResults> {
        let key = normalize_query(query);

        {
            let mut inner = self.inner.write().await;
            if let Some(entry) = inner.entries.get(&key) {
                if !entry.is_expired(self.ttl) {
                    let products = entry.products.clone();
                    inner.stats.record_hit();
                    debug!(%key, results = products.len(), "search cache hit");
                    return Ok(SearchResults::cached(products));
                }
            }
            inner.stats.record_miss();
        }

        // Miss or expired: fetch outside the lock. An expired entry stays in
        // place until a successful refetch overwrites it.
        debug!(%key, "search cache miss, querying backend");
        let products = self.backend.search(query).await?;

        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner
            .entries
            .insert(key, CacheEntry::new(products.clone(), seq));

        // A single insert can push the map at most one over capacity, but a
        // loop keeps the invariant unconditional.
        while inner.entries.len() > self.max_entries {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| (entry.inserted_at, entry.seq))
                .map(|(key, _)| key.clone());
            match oldest {
                Some(evicted) => {
                    inner.entries.remove(&evicted);
                    inner.stats.record_eviction();
                    debug!(key = %evicted, "evicted oldest search cache entry");
                }
                None => break,
            }
        }

        Ok(SearchResults::fetched(products))
    }

    // == Clear ==
    /// Empties the cache unconditionally. Counters are preserved.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.entries.clear();
        debug!("search cache cleared");
    }

    // == Stats ==
    /// Returns a snapshot of the hit/miss/eviction counters.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats.clone()
    }

    // == Length ==
    /// Current number of entries, expired ones included until they are
    /// overwritten, evicted, or cleared.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
