//! Application state handed to presentation code.
//!
//! Built once at startup and passed by reference; there are no global stores.

use cake_shop_core::ProductId;

use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::storage::{FileStore, KeyValueStore};

/// The storefront's catalog and cart for one session.
#[derive(Debug)]
pub struct AppState<S> {
    config: StorefrontConfig,
    catalog: CatalogStore,
    cart: CartStore<S>,
}

impl<S: KeyValueStore> AppState<S> {
    /// Create the state over an explicit storage backend.
    ///
    /// The cart is restored from `storage` immediately.
    pub fn new(config: StorefrontConfig, storage: S) -> Self {
        let catalog = CatalogStore::seeded(config.page_size);
        let cart = CartStore::load(storage, config.cart_key.clone());
        tracing::info!(
            products = catalog.products().len(),
            cart_lines = cart.unique_items(),
            "Storefront state initialized"
        );

        Self {
            config,
            catalog,
            cart,
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub const fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    /// Add one unit of the catalog product `product_id` to the cart.
    ///
    /// Returns `false` and leaves the cart alone if the catalog has no such product.
    pub fn add_to_cart_by_id(&mut self, product_id: ProductId) -> bool {
        let Some(product) = self.catalog.product_by_id(product_id) else {
            tracing::debug!(%product_id, "Ignoring add for unknown product");
            return false;
        };
        self.cart.add_to_cart(product);
        true
    }
}

impl AppState<FileStore> {
    /// Create the state with file-backed persistence in `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the configured cart key cannot be used
    /// as a file slot.
    pub fn from_config(config: StorefrontConfig) -> Result<Self> {
        let storage = FileStore::new(&config.data_dir);
        storage.path_for(&config.cart_key)?;
        Ok(Self::new(config, storage))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::storage::MemoryStore;

    #[test]
    fn test_new_seeds_catalog_and_empty_cart() {
        let state = AppState::new(StorefrontConfig::default(), MemoryStore::new());
        assert_eq!(state.catalog().products().len(), 8);
        assert!(state.cart().is_empty());
        assert_eq!(state.cart().key(), "cake-shop-cart");
    }

    #[test]
    fn test_page_size_comes_from_config() {
        let config = StorefrontConfig {
            page_size: std::num::NonZeroUsize::new(3).unwrap(),
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config, MemoryStore::new());
        assert_eq!(state.catalog().paginated_products().len(), 3);
    }

    #[test]
    fn test_add_to_cart_by_id() {
        let mut state = AppState::new(StorefrontConfig::default(), MemoryStore::new());

        assert!(state.add_to_cart_by_id(ProductId::new(2)));
        assert!(state.add_to_cart_by_id(ProductId::new(2)));
        assert!(!state.add_to_cart_by_id(ProductId::new(42)));

        assert_eq!(state.cart().item_quantity(ProductId::new(2)), 2);
        assert_eq!(state.cart().unique_items(), 1);
    }

    #[test]
    fn test_from_config_rejects_unusable_cart_key() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            cart_key: "../cart".to_string(),
            ..StorefrontConfig::default()
        };

        let result = AppState::from_config(config);
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
