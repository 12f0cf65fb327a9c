//! Product Model
//!
//! Explicit structural type for catalog products. The storefront UI treats
//! these as opaque records; the cache stores immutable snapshots of them.

use serde::{Deserialize, Serialize};

// == Product ==
/// A single catalog product as returned by the search backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Long description
    pub description: String,
    /// Stock keeping unit code
    pub sku: String,
    /// Brand name
    pub brand: String,
    /// Regular price
    pub price: f64,
    /// Discounted price, if the product is on sale
    pub sale_price: Option<f64>,
    /// Average customer rating (0.0 - 5.0)
    pub rating: f32,
    /// Whether the product is currently in stock
    pub in_stock: bool,
}
