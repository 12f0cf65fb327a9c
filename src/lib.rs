//! Search Cache - a time and size bounded memoization layer for product search
//!
//! Wraps a slow product search backend with an in-memory cache keyed by the
//! normalized query string. Entries expire after a TTL and the cache never
//! holds more than a fixed number of entries.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod search;

pub use cache::{CacheStats, SearchResultCache};
pub use config::CacheConfig;
pub use error::SearchError;
pub use models::{Product, SearchResults};
pub use search::{MockProductSearch, ProductSearch};
