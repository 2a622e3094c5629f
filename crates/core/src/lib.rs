//! Cake Shop Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront state stores:
//! products as seeded in the catalog, cart line items, prices and categories.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no logging.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   product, category and cart line item models

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
