//! Search Results Model
//!
//! The outcome of a cached search: the product list plus an observability
//! tag saying whether it was served from the cache.

use serde::Serialize;

use crate::models::Product;

// == Search Results ==
/// A product list returned by [`SearchResultCache`](crate::SearchResultCache).
///
/// `from_cache` is informational only; callers must not branch correctness
/// decisions on it.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    /// Matching products, snapshot taken at fetch time
    pub products: Vec<Product>,
    /// True if the result was served from an unexpired cache entry
    pub from_cache: bool,
}

impl SearchResults {
    /// Creates a result served from a fresh cache entry.
    pub(crate) fn cached(products: Vec<Product>) -> Self {
        Self {
            products,
            from_cache: true,
        }
    }

    /// Creates a result freshly fetched from the search backend.
    pub(crate) fn fetched(products: Vec<Product>) -> Self {
        Self {
            products,
            from_cache: false,
        }
    }
}
