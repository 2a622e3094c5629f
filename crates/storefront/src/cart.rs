//! Shopping cart store.
//!
//! The cart is a list of line items, each a snapshot of a product plus a
//! quantity. Every mutation writes the whole list to a key-value slot as JSON,
//! and the slot is read back once when the store is built.
//!
//! Mutations never fail from the caller's point of view: a failed write is
//! logged and the in-memory cart stays authoritative for the session.

use std::collections::HashSet;

use cake_shop_core::{CartLineItem, Price, Product, ProductId};
use thiserror::Error;
use tracing::instrument;

use crate::storage::{KeyValueStore, StorageError};

/// Slot the cart is persisted under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "cake-shop-cart";

/// Persisted cart data that cannot be trusted.
#[derive(Debug, Error)]
pub enum CartDecodeError {
    /// Not a JSON array of complete line items.
    #[error("Malformed cart data: {0}")]
    Json(#[from] serde_json::Error),

    /// A line item with a zero quantity.
    #[error("Line item for product {0} has zero quantity")]
    ZeroQuantity(ProductId),

    /// Two line items for the same product.
    #[error("Duplicate line item for product {0}")]
    DuplicateItem(ProductId),
}

/// Errors from explicit cart persistence calls.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Cart storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Decode a persisted cart, validating its shape.
///
/// The value must be a JSON array of objects carrying every product field
/// plus a positive integer `quantity`, with at most one item per product id.
///
/// # Errors
///
/// Returns `CartDecodeError` describing the first problem found.
pub fn decode_cart(raw: &str) -> Result<Vec<CartLineItem>, CartDecodeError> {
    let items: Vec<CartLineItem> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if item.quantity == 0 {
            return Err(CartDecodeError::ZeroQuantity(item.id()));
        }
        if !seen.insert(item.id()) {
            return Err(CartDecodeError::DuplicateItem(item.id()));
        }
    }

    Ok(items)
}

/// Encode line items in the persisted cart format.
///
/// # Errors
///
/// Returns the serializer error if encoding fails.
pub fn encode_cart(items: &[CartLineItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// The shopping cart for one session.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    items: Vec<CartLineItem>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Build the cart from whatever is persisted under `key`.
    ///
    /// A missing, unreadable or malformed slot yields an empty cart.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            items: Vec::new(),
        };
        store.items = store.read_persisted();
        store
    }

    /// Build the cart from the default slot.
    pub fn load_default(storage: S) -> Self {
        Self::load(storage, DEFAULT_CART_KEY)
    }

    /// Add one unit of `product`.
    ///
    /// An existing line item for the same id gets its quantity bumped; the
    /// stored snapshot is left as it was. Otherwise a new snapshot is appended.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(item) = self.find_mut(product.id) {
            item.quantity = item.quantity.saturating_add(1);
            tracing::debug!(quantity = item.quantity, "Incremented cart line");
        } else {
            self.items.push(CartLineItem::new(product));
            tracing::debug!("Added cart line");
        }
        self.persist();
    }

    /// Remove the line item for `product_id`, if any.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let Some(index) = self.position(product_id) else {
            return;
        };
        self.items.remove(index);
        tracing::debug!("Removed cart line");
        self.persist();
    }

    /// Set the quantity of a line item to exactly `quantity`.
    ///
    /// Zero or negative removes the item. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if !self.is_in_cart(product_id) {
            return;
        }
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.find_mut(product_id) {
            item.quantity = quantity;
        }
        tracing::debug!(quantity, "Updated cart line quantity");
        self.persist();
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        self.items.clear();
        tracing::debug!("Cleared cart");
        self.persist();
    }

    #[must_use]
    pub fn is_in_cart(&self, product_id: ProductId) -> bool {
        self.position(product_id).is_some()
    }

    /// Quantity held for `product_id`, 0 when absent.
    #[must_use]
    pub fn item_quantity(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.id() == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Line items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` over all line items.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slot key the cart persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the current cart to storage.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if encoding or the storage write fails.
    pub fn save(&self) -> Result<(), CartError> {
        let encoded = encode_cart(&self.items).map_err(CartError::Encode)?;
        self.storage.set(&self.key, &encoded)?;
        Ok(())
    }

    /// Replace the in-memory cart with what is persisted.
    ///
    /// Follows the same fallback rules as [`CartStore::load`].
    #[instrument(skip(self))]
    pub fn reload(&mut self) {
        self.items = self.read_persisted();
    }

    fn read_persisted(&self) -> Vec<CartLineItem> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read persisted cart");
                return Vec::new();
            }
        };

        match decode_cart(&raw) {
            Ok(items) => {
                tracing::debug!(key = %self.key, lines = items.len(), "Restored cart");
                items
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Discarding malformed cart data");
                Vec::new()
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::error!(key = %self.key, error = %e, "Failed to persist cart");
        }
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == product_id)
    }

    fn find_mut(&mut self, product_id: ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id() == product_id)
    }
}
