//! Core types for Cake Shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod category;
pub mod id;
pub mod price;
pub mod product;

pub use cart::CartLineItem;
pub use category::{Category, CategoryFilter, CategoryOption, ParseCategoryError};
pub use id::*;
pub use price::Price;
pub use product::Product;
