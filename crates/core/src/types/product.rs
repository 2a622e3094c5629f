//! Catalog product model.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId};

/// A product as listed in the catalog.
///
/// Field names serialize in camelCase (`originalPrice`, `isHot`, ...) to match
/// the persisted cart format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub original_price: Price,
    pub category: Category,
    /// Image URL.
    pub image: String,
    pub sales: u32,
    pub stock: u32,
    /// Average review score, 0 to 5.
    pub rating: f64,
    pub is_hot: bool,
    pub is_special: bool,
}

impl Product {
    /// Whether `keyword` (already lowercased) occurs in the name or description.
    #[must_use]
    pub fn matches_keyword(&self, lowercase_keyword: &str) -> bool {
        self.name.to_lowercase().contains(lowercase_keyword)
            || self.description.to_lowercase().contains(lowercase_keyword)
    }
}
