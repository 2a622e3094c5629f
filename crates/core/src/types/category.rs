//! Product categories and the catalog's category filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key accepted by [`CategoryFilter`] for "no category filter".
pub const ALL_CATEGORIES_KEY: &str = "all";

/// Fixed product classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chocolate,
    Fruit,
    Cheese,
    Coffee,
    Matcha,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 5] = [
        Self::Chocolate,
        Self::Fruit,
        Self::Cheese,
        Self::Coffee,
        Self::Matcha,
    ];

    /// Stable key used in URLs and persisted data.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Chocolate => "chocolate",
            Self::Fruit => "fruit",
            Self::Cheese => "cheese",
            Self::Coffee => "coffee",
            Self::Matcha => "matcha",
        }
    }

    /// Display label shown to shoppers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chocolate => "巧克力蛋糕",
            Self::Fruit => "水果蛋糕",
            Self::Cheese => "芝士蛋糕",
            Self::Coffee => "咖啡蛋糕",
            Self::Matcha => "抹茶蛋糕",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string is not a known category key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A `{value, label}` pair for category pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl From<Category> for CategoryOption {
    fn from(category: Category) -> Self {
        Self {
            value: category.key(),
            label: category.label(),
        }
    }
}

/// Active category filter of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only products of this category.
    Only(Category),
    /// A key no product carries; matches nothing.
    Other(String),
}

impl CategoryFilter {
    /// Interpret a raw category key. `"all"` and the empty string clear the filter.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        if key.is_empty() || key == ALL_CATEGORIES_KEY {
            return Self::All;
        }
        key.parse().map_or_else(|_| Self::Other(key.to_string()), Self::Only)
    }

    /// Whether a product of `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
            Self::Other(_) => false,
        }
    }

    /// The key this filter was selected with.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES_KEY,
            Self::Only(category) => category.key(),
            Self::Other(key) => key,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}
