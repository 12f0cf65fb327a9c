//! Property-Based Tests for the Search Result Cache
//!
//! Uses proptest to verify the size bound and key normalization over
//! generated inputs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use proptest::prelude::*;

use crate::cache::{normalize_query, SearchResultCache};
use crate::models::Product;
use crate::search::ProductSearch;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(600);

/// Counting backend that echoes the normalized query back as a one-product
/// result, so distinct keys yield distinct values.
#[derive(Default)]
struct EchoSearch {
    calls: AtomicUsize,
}

#[async_trait]
impl ProductSearch for EchoSearch {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<Product>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Product {
            name: normalize_query(query),
            ..Default::default()
        }])
    }
}

// == Strategies ==
/// Queries with mixed case and surrounding whitespace.
fn query_strategy() -> impl Strategy<Value = String> {
    (" {0,3}", "[a-zA-Z0-9 ]{0,24}", " {0,3}").prop_map(|(lead, body, tail)| {
        format!("{lead}{body}{tail}")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of queries, the cache never holds more than
    // max_entries entries after any call completes.
    #[test]
    fn prop_capacity_enforcement(queries in prop::collection::vec(query_strategy(), 1..60)) {
        let max_entries = 10;
        let cache = SearchResultCache::new(EchoSearch::default(), max_entries, TEST_TTL);

        tokio_test::block_on(async {
            for query in &queries {
                cache.get_or_fetch(query).await.unwrap();
                prop_assert!(
                    cache.len().await <= max_entries,
                    "cache size {} exceeds max {}",
                    cache.len().await,
                    max_entries
                );
            }
            Ok(())
        })?;
    }

    // Normalization is idempotent and insensitive to case and surrounding
    // whitespace.
    #[test]
    fn prop_normalization_idempotent(query in query_strategy()) {
        let key = normalize_query(&query);
        prop_assert_eq!(normalize_query(&key), key.clone());

        let noisy = format!("  {} ", query.to_uppercase());
        prop_assert_eq!(normalize_query(&noisy), key);
    }

    // For any query, a second lookup within the TTL is a hit: same products,
    // no second backend call.
    #[test]
    fn prop_repeat_lookup_is_idempotent_hit(query in query_strategy()) {
        let backend = Arc::new(EchoSearch::default());
        let cache = SearchResultCache::new(backend.clone(), 10, TEST_TTL);

        tokio_test::block_on(async {
            let first = cache.get_or_fetch(&query).await.unwrap();
            let second = cache.get_or_fetch(&query).await.unwrap();

            prop_assert_eq!(&second.products, &first.products);
            prop_assert!(second.from_cache);
            prop_assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
            Ok(())
        })?;
    }

    // Normalizing key collisions share one entry: fetching a query and a
    // noisy variant of it invokes the backend once.
    #[test]
    fn prop_collision_after_normalization(query in query_strategy()) {
        let backend = Arc::new(EchoSearch::default());
        let cache = SearchResultCache::new(backend.clone(), 10, TEST_TTL);

        tokio_test::block_on(async {
            cache.get_or_fetch(&query).await.unwrap();
            let noisy = format!(" {} ", query.to_uppercase());
            let hit = cache.get_or_fetch(&noisy).await.unwrap();

            prop_assert!(hit.from_cache);
            prop_assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
            prop_assert_eq!(cache.len().await, 1);
            Ok(())
        })?;
    }
}

// == Additional Deterministic Edge Cases ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_capacity_cache_never_stores() {
        let backend = Arc::new(EchoSearch::default());
        let cache = SearchResultCache::new(backend.clone(), 0, TEST_TTL);

        cache.get_or_fetch("drill").await.unwrap();
        assert_eq!(cache.len().await, 0);

        cache.get_or_fetch("drill").await.unwrap();
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }
}
