//! Error types for the search cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Search Error Enum ==
/// Unified error type surfaced by [`SearchResultCache`](crate::SearchResultCache).
///
/// The cache itself cannot fail independently of its collaborator; the only
/// error kind is a failed upstream search. On an upstream failure the cache
/// state is left exactly as it was before the call.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The injected search backend failed
    #[error("upstream search failed: {0}")]
    Upstream(anyhow::Error),
}

impl From<anyhow::Error> for SearchError {
    fn from(err: anyhow::Error) -> Self {
        SearchError::Upstream(err)
    }
}

// == Result Type Alias ==
/// Convenience Result type for the search cache.
pub type Result<T> = std::result::Result<T, SearchError>;
