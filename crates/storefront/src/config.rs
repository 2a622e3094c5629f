//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_DATA_DIR` - Directory holding persisted client state (default: .cake-shop)
//! - `STOREFRONT_CART_KEY` - Slot key the cart is persisted under (default: cake-shop-cart)
//! - `STOREFRONT_PAGE_SIZE` - Products per catalog page (default: 8)

use std::num::NonZeroUsize;
use std::path::PathBuf;

use thiserror::Error;

use crate::cart::DEFAULT_CART_KEY;
use crate::catalog::DEFAULT_PAGE_SIZE;

const DEFAULT_DATA_DIR: &str = ".cake-shop";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for file-backed persistence
    pub data_dir: PathBuf,
    /// Key of the persisted cart slot
    pub cart_key: String,
    /// Catalog page size
    pub page_size: NonZeroUsize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cart_key: DEFAULT_CART_KEY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("STOREFRONT_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);

        let cart_key = match lookup("STOREFRONT_CART_KEY") {
            Some(key) if key.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "STOREFRONT_CART_KEY".to_string(),
                    "must not be empty".to_string(),
                ));
            }
            Some(key) => key,
            None => defaults.cart_key,
        };

        let page_size = lookup("STOREFRONT_PAGE_SIZE")
            .map(|raw| parse_page_size(&raw))
            .transpose()?
            .unwrap_or(defaults.page_size);

        Ok(Self {
            data_dir,
            cart_key,
            page_size,
        })
    }
}

fn parse_page_size(raw: &str) -> Result<NonZeroUsize, ConfigError> {
    raw.trim().parse::<NonZeroUsize>().map_err(|e| {
        ConfigError::InvalidEnvVar("STOREFRONT_PAGE_SIZE".to_string(), e.to_string())
    })
}
