//! Integration tests for browsing the catalog and filling the cart.

#![allow(clippy::unwrap_used)]

use cake_shop_core::{Category, CategoryFilter, Price, ProductId};
use cake_shop_storefront::catalog::DEFAULT_RECOMMENDATION_LIMIT;
use cake_shop_storefront::storage::MemoryStore;
use cake_shop_storefront::{AppState, StorefrontConfig};

fn fresh_state() -> AppState<MemoryStore> {
    AppState::new(StorefrontConfig::default(), MemoryStore::new())
}

#[test]
fn test_browse_fruit_and_buy_everything_listed() {
    let mut state = fresh_state();
    state.catalog_mut().set_category(CategoryFilter::Only(Category::Fruit));

    let listed: Vec<ProductId> = state
        .catalog()
        .paginated_products()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(listed, vec![ProductId::new(2), ProductId::new(5)]);
    assert_eq!(state.catalog().total_pages(), 1);

    for id in listed {
        assert!(state.add_to_cart_by_id(id));
    }

    assert_eq!(state.cart().unique_items(), 2);
    assert_eq!(state.cart().total_price(), Price::from_yuan(98 + 118));
}

#[test]
fn test_search_then_page_back() {
    let mut state = fresh_state();
    let catalog = state.catalog_mut();

    catalog.set_page(2);
    catalog.set_search_keyword("芒果");

    assert_eq!(catalog.page(), 1);
    let names: Vec<_> = catalog
        .paginated_products()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(names, vec!["芒果千层".to_string()]);

    catalog.set_search_keyword("");
    assert_eq!(catalog.total_pages(), 1);
    assert_eq!(catalog.paginated_products().len(), 8);
}

#[test]
fn test_product_page_recommendations() {
    let mut state = fresh_state();

    let product = state.catalog().product_by_raw_id("1").unwrap().clone();
    let recommended: Vec<ProductId> = state
        .catalog()
        .recommended_products(product.id, DEFAULT_RECOMMENDATION_LIMIT)
        .iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(recommended.len(), 4);
    assert!(!recommended.contains(&product.id));

    state.cart_mut().add_to_cart(&product);
    assert!(state.cart().is_in_cart(product.id));
    assert_eq!(state.cart().item_quantity(product.id), 1);
}

#[test]
fn test_cart_lines_reference_catalog_products() {
    let mut state = fresh_state();
    for id in [4, 1, 4, 6] {
        state.add_to_cart_by_id(ProductId::new(id));
    }

    for item in state.cart().items() {
        let listed = state.catalog().product_by_id(item.id()).unwrap();
        assert_eq!(&item.product, listed);
    }
    assert_eq!(state.cart().total_items(), 4);
    assert_eq!(state.cart().unique_items(), 3);
}

#[test]
fn test_specials_unaffected_by_browsing() {
    let mut state = fresh_state();
    let before: Vec<ProductId> = state.catalog().special_products().iter().map(|p| p.id).collect();

    state.catalog_mut().set_category_key("matcha");
    state.catalog_mut().set_search_keyword("红豆");

    let after: Vec<ProductId> = state.catalog().special_products().iter().map(|p| p.id).collect();
    assert_eq!(before, after);
    assert_eq!(state.catalog().filtered_products().len(), 1);
}
