//! Hard-coded catalog contents.
//!
//! The storefront has no product backend; these eight cakes are the whole
//! catalog and are loaded once when the catalog store is built.

use cake_shop_core::{Category, Price, Product, ProductId};

struct SeedProduct {
    id: i32,
    name: &'static str,
    description: &'static str,
    price: i64,
    original_price: i64,
    category: Category,
    image: &'static str,
    sales: u32,
    stock: u32,
    rating: f64,
    is_hot: bool,
    is_special: bool,
}

const SEED: [SeedProduct; 8] = [
    SeedProduct {
        id: 1,
        name: "经典巧克力慕斯",
        description: "浓郁巧克力，层次丰富，口感顺滑",
        price: 128,
        original_price: 158,
        category: Category::Chocolate,
        image: "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=400&h=300&fit=crop&crop=center",
        sales: 156,
        stock: 50,
        rating: 4.8,
        is_hot: true,
        is_special: true,
    },
    SeedProduct {
        id: 2,
        name: "草莓奶油蛋糕",
        description: "新鲜草莓配奶油，酸甜可口",
        price: 98,
        original_price: 128,
        category: Category::Fruit,
        image: "https://images.unsplash.com/photo-1565958011703-44f9829ba187?w=400&h=300&fit=crop&crop=center",
        sales: 203,
        stock: 45,
        rating: 4.9,
        is_hot: true,
        is_special: false,
    },
    SeedProduct {
        id: 3,
        name: "芝士蛋糕",
        description: "免烤芝士蛋糕，入口即化",
        price: 88,
        original_price: 108,
        category: Category::Cheese,
        image: "https://images.unsplash.com/photo-1533134242443-d4fd215305ad?w=400&h=300&fit=crop&crop=center",
        sales: 189,
        stock: 60,
        rating: 4.7,
        is_hot: false,
        is_special: true,
    },
    SeedProduct {
        id: 4,
        name: "提拉米苏",
        description: "意大利经典，咖啡香浓郁",
        price: 138,
        original_price: 168,
        category: Category::Coffee,
        image: "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9?w=400&h=300&fit=crop&crop=center",
        sales: 134,
        stock: 35,
        rating: 4.8,
        is_hot: false,
        is_special: false,
    },
    SeedProduct {
        id: 5,
        name: "芒果千层",
        description: "层层叠叠，芒果清香",
        price: 118,
        original_price: 148,
        category: Category::Fruit,
        image: "https://images.unsplash.com/photo-1551024506-0bccd828d307?w=400&h=300&fit=crop&crop=center",
        sales: 167,
        stock: 40,
        rating: 4.6,
        is_hot: false,
        is_special: true,
    },
    SeedProduct {
        id: 6,
        name: "红丝绒蛋糕",
        description: "经典美式，红色诱惑",
        price: 148,
        original_price: 188,
        category: Category::Chocolate,
        image: "https://images.unsplash.com/photo-1603532648955-039310d9ed75?w=400&h=300&fit=crop&crop=center",
        sales: 98,
        stock: 30,
        rating: 4.7,
        is_hot: false,
        is_special: false,
    },
    SeedProduct {
        id: 7,
        name: "抹茶红豆",
        description: "日式风味，清新淡雅",
        price: 108,
        original_price: 138,
        category: Category::Matcha,
        image: "https://images.unsplash.com/photo-1551024709-8f23befc6f87?w=400&h=300&fit=crop&crop=center",
        sales: 145,
        stock: 55,
        rating: 4.9,
        is_hot: true,
        is_special: false,
    },
    SeedProduct {
        id: 8,
        name: "蓝莓芝士",
        description: "蓝莓酸甜，芝士浓郁",
        price: 128,
        original_price: 158,
        category: Category::Cheese,
        image: "https://images.unsplash.com/photo-1565958011703-44f9829ba187?w=400&h=300&fit=crop&crop=center",
        sales: 178,
        stock: 42,
        rating: 4.8,
        is_hot: false,
        is_special: true,
    },
];

impl SeedProduct {
    fn to_product(&self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: Price::from_yuan(self.price),
            original_price: Price::from_yuan(self.original_price),
            category: self.category,
            image: self.image.to_string(),
            sales: self.sales,
            stock: self.stock,
            rating: self.rating,
            is_hot: self.is_hot,
            is_special: self.is_special,
        }
    }
}

/// The catalog's products, in listing order.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    SEED.iter().map(SeedProduct::to_product).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_has_eight_unique_products() {
        let products = seed_products();
        assert_eq!(products.len(), 8);

        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_seed_ratings_in_range() {
        for product in seed_products() {
            assert!((0.0..=5.0).contains(&product.rating), "{}", product.name);
            assert!(product.price <= product.original_price, "{}", product.name);
        }
    }
}
