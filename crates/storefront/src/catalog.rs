//! Product catalog store.
//!
//! Owns the product list and the listing filter state (category, keyword,
//! page). Derived views are plain functions of that state and are recomputed
//! on every call, applied in this order:
//!
//! 1. category filter (skipped for [`CategoryFilter::All`])
//! 2. keyword filter, case-insensitive substring of name or description
//! 3. [`CatalogStore::filtered_products`] is the result of 1 and 2
//! 4. [`CatalogStore::paginated_products`] slices one page of it
//! 5. [`CatalogStore::total_pages`] is `ceil(filtered / page_size)`
//!
//! Catalog state is not persisted and starts fresh each session.

use std::num::NonZeroUsize;

use cake_shop_core::{Category, CategoryFilter, CategoryOption, Product, ProductId};
use tracing::instrument;

use crate::seed::seed_products;

/// Number of recommendations returned when the caller has no preference.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 4;

/// Products per listing page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(size) => size,
    None => unreachable!(),
};

/// The product catalog and its listing filters.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    category: CategoryFilter,
    page: u32,
    page_size: NonZeroUsize,
    keyword: String,
}

impl CatalogStore {
    /// A catalog over `products` with no filters, on page 1.
    #[must_use]
    pub fn new(products: Vec<Product>, page_size: NonZeroUsize) -> Self {
        Self {
            products,
            category: CategoryFilter::All,
            page: 1,
            page_size,
            keyword: String::new(),
        }
    }

    /// A catalog over the built-in seed products.
    #[must_use]
    pub fn seeded(page_size: NonZeroUsize) -> Self {
        Self::new(seed_products(), page_size)
    }

    // =========================================================================
    // Filter state
    // =========================================================================

    /// Select a category and go back to the first page.
    #[instrument(skip(self))]
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    /// Select a category by key (`"all"` clears the filter).
    pub fn set_category_key(&mut self, key: &str) {
        self.set_category(CategoryFilter::from_key(key));
    }

    /// Jump to a 1-indexed page. Out of range pages are simply empty.
    #[instrument(skip(self))]
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Set the search keyword and go back to the first page.
    #[instrument(skip(self))]
    pub fn set_search_keyword(&mut self, keyword: &str) {
        keyword.clone_into(&mut self.keyword);
        self.page = 1;
    }

    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Every product, unfiltered.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product from an untyped id such as a route parameter.
    ///
    /// The input is coerced with [`ProductId::parse_lenient`] first.
    #[must_use]
    pub fn product_by_raw_id(&self, raw: &str) -> Option<&Product> {
        ProductId::parse_lenient(raw).and_then(|id| self.product_by_id(id))
    }

    /// Up to `limit` products other than `exclude`, best rated first.
    ///
    /// Products with equal ratings keep their catalog order.
    #[must_use]
    pub fn recommended_products(&self, exclude: ProductId, limit: usize) -> Vec<&Product> {
        let mut candidates: Vec<&Product> =
            self.products.iter().filter(|p| p.id != exclude).collect();
        candidates.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        candidates.truncate(limit);
        candidates
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Products passing the category and keyword filters, in catalog order.
    #[must_use]
    pub fn filtered_products(&self) -> Vec<&Product> {
        let keyword = self.keyword.to_lowercase();
        self.products
            .iter()
            .filter(|p| self.category.matches(p.category))
            .filter(|p| keyword.is_empty() || p.matches_keyword(&keyword))
            .collect()
    }

    /// The current page of [`Self::filtered_products`].
    #[must_use]
    pub fn paginated_products(&self) -> Vec<&Product> {
        let Some(page_index) = self.page.checked_sub(1) else {
            return Vec::new();
        };
        let size = self.page_size.get();
        let start = usize::try_from(page_index)
            .ok()
            .and_then(|index| index.checked_mul(size))
            .unwrap_or(usize::MAX);

        self.filtered_products()
            .into_iter()
            .skip(start)
            .take(size)
            .collect()
    }

    /// Number of pages needed for the filtered products. Zero when nothing matches.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered_products().len().div_ceil(self.page_size.get())
    }

    /// Promotionally featured products, regardless of filters.
    #[must_use]
    pub fn special_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_special).collect()
    }

    /// Category picker entries in display order.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryOption> {
        Category::ALL.into_iter().map(CategoryOption::from).collect()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded(DEFAULT_PAGE_SIZE)
    }
}
