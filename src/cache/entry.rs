//! Cache Entry Module
//!
//! A single cached search result snapshot with its insertion timestamp.

use std::time::Duration;

use tokio::time::Instant;

use crate::models::Product;

// == Cache Entry ==
/// One cached result set, immutable after insertion.
///
/// `inserted_at` is a monotonic instant and is never refreshed by reads;
/// `seq` records insertion order and breaks eviction ties between entries
/// stamped at the same instant.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Result snapshot taken when the backend search succeeded
    pub products: Vec<Product>,
    /// Monotonic timestamp of insertion
    pub inserted_at: Instant,
    /// Insertion sequence number
    pub seq: u64,
}

impl CacheEntry {
    /// Creates an entry stamped with the current instant.
    pub fn new(products: Vec<Product>, seq: u64) -> Self {
        Self {
            products,
            inserted_at: Instant::now(),
            seq,
        }
    }

    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is expired once its age is greater than
    /// or equal to the TTL, so it is never served as a hit at exactly TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }

    /// Age of the entry since insertion.
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }
}
