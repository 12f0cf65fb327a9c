//! Search Backend Module
//!
//! The injected search collaborator the cache wraps, plus a mock
//! catalog-backed implementation for development and tests.

mod mock;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::Product;

pub use mock::MockProductSearch;

// == Product Search Trait ==
/// The underlying product search the cache memoizes.
///
/// Implementations receive the caller's original (un-normalized) query and
/// return the full matching product list. Failures are reported through
/// `anyhow` and surfaced to the cache caller unmodified.
#[async_trait]
pub trait ProductSearch: Send + Sync {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<Product>>;
}

// Lets callers keep a handle to the backend they hand to the cache.
#[async_trait]
impl<T: ProductSearch + ?Sized> ProductSearch for Arc<T> {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<Product>> {
        (**self).search(query).await
    }
}
