//! Mock Product Search
//!
//! Catalog-backed search backend with a simulated network round trip.
//! Matches the query case-insensitively against name, description, SKU,
//! and brand. A blank query returns the whole catalog.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::models::Product;
use crate::search::ProductSearch;

/// Simulated round-trip latency applied to every search.
const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

// == Mock Product Search ==
/// In-memory product search over an injected catalog.
#[derive(Debug, Clone)]
pub struct MockProductSearch {
    catalog: Vec<Product>,
    latency: Duration,
}

impl MockProductSearch {
    /// Creates a mock search over the given catalog with the default
    /// simulated latency.
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Overrides the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl ProductSearch for MockProductSearch {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<Product>> {
        // Simulate the API round trip
        tokio::time::sleep(self.latency).await;

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(self.catalog.clone());
        }

        let results: Vec<Product> = self
            .catalog
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
                    || product.sku.to_lowercase().contains(&needle)
                    || product.brand.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        debug!(query = %needle, matches = results.len(), "mock catalog search");
        Ok(results)
    }
}
