//! Integration tests for the Cake Shop storefront stores.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cake-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - cart state surviving restarts through the file store
//! - `shopping_flow` - catalog browsing feeding the cart through `AppState`
