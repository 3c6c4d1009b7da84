//! Test Helpers

use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::{
    categories::data::NewCategory, products::data::NewProduct, reviews::data::NewReview,
};

pub(crate) fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        description: None,
        image: None,
        parent_id: None,
        is_active: true,
        sort_order: 0,
    }
}

pub(crate) fn new_product(name: &str, sku: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: None,
        short_description: None,
        sku: sku.to_string(),
        price: Decimal::new(1999, 2),
        compare_price: None,
        cost_price: None,
        stock: 0,
        low_stock_threshold: 5,
        category_id: None,
        brand: None,
        images: Vec::new(),
        attributes: json!({}),
        is_active: true,
        is_featured: false,
    }
}

pub(crate) fn new_review(rating: i32) -> NewReview {
    NewReview {
        rating,
        title: None,
        comment: None,
        images: Vec::new(),
    }
}
