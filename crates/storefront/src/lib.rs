//! Cake Shop Storefront state library.
//!
//! Two independent stores back the storefront UI:
//!
//! - [`catalog::CatalogStore`] - the product list and its filter, search and
//!   pagination views
//! - [`cart::CartStore`] - the shopping cart, persisted to a key-value slot
//!
//! The only link between them is the product id. [`state::AppState`] builds
//! both once at startup and is passed to consumers by reference.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod seed;
pub mod state;
pub mod storage;
pub mod telemetry;

pub use cart::CartStore;
pub use catalog::CatalogStore;
pub use config::StorefrontConfig;
pub use error::{AppError, Result};
pub use state::AppState;
