//! Unified error handling.
//!
//! Store operations are total and never return errors. `AppError` covers the
//! fallible edges around them: loading configuration and talking to storage
//! explicitly.

use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Explicit cart save failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
