//! Cart line items.

use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductId};

/// A cart entry: a snapshot of the product at the time it was added, plus a quantity.
///
/// The product fields are flattened, so the JSON form is the product object
/// with an extra `quantity` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    /// Snapshot `product` with a quantity of one.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// ID of the snapshotted product.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price at the time the product was added.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.product.price
    }

    /// `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Category;

    fn tiramisu() -> Product {
        Product {
            id: ProductId::new(4),
            name: "提拉米苏".to_string(),
            description: "意大利经典，咖啡香浓郁".to_string(),
            price: Price::from_yuan(138),
            original_price: Price::from_yuan(168),
            category: Category::Coffee,
            image: "https://example.com/tiramisu.jpg".to_string(),
            sales: 134,
            stock: 35,
            rating: 4.8,
            is_hot: false,
            is_special: false,
        }
    }

    #[test]
    fn test_line_total() {
        let mut item = CartLineItem::new(&tiramisu());
        assert_eq!(item.line_total(), Price::from_yuan(138));
        item.quantity = 3;
        assert_eq!(item.line_total(), Price::from_yuan(414));
    }

    #[test]
    fn test_json_shape_is_flat() {
        let item = CartLineItem::new(&tiramisu());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], 4);
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["category"], "coffee");
        assert_eq!(json["isSpecial"], false);
        assert!(json["originalPrice"].is_number());
        assert!(json.get("product").is_none());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut product = tiramisu();
        let item = CartLineItem::new(&product);
        product.price = Price::from_yuan(1);
        assert_eq!(item.price(), Price::from_yuan(138));
    }
}
