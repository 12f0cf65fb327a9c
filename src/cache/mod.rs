//! Cache Module
//!
//! Time and size bounded memoization of search results.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::{normalize_query, SearchResultCache};
