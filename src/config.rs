//! Configuration Module
//!
//! Construction-time cache parameters with environment variable overrides.

use std::env;
use std::time::Duration;

// == Defaults ==
/// Default maximum number of cached search results
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default entry time-to-live in seconds (10 minutes)
pub const DEFAULT_TTL_SECS: u64 = 600;

/// Cache configuration parameters.
///
/// Fixed at construction time; not mutable at run time.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Entry time-to-live in seconds
    pub ttl_secs: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SEARCH_CACHE_MAX_ENTRIES` - Maximum cached queries (default: 100)
    /// - `SEARCH_CACHE_TTL_SECS` - Entry TTL in seconds (default: 600)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("SEARCH_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ENTRIES),
            ttl_secs: env::var("SEARCH_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
        }
    }

    /// Entry time-to-live as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}
