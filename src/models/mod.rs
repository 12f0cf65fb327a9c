//! Data Models
//!
//! Named types for the product catalog and search results.

mod product;
mod results;

pub use product::Product;
pub use results::SearchResults;
