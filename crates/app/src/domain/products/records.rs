//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::{domain::categories::records::CategoryId, ids::TypedId};

/// Product id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
///
/// `rating` and `review_count` are derived from approved reviews and cached
/// here; they are recomputed whenever a review is created.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub sku: String,
    pub price: Decimal,
    pub compare_price: Option<Decimal>,
    pub cost_price: Option<Decimal>,
    pub stock: i32,
    pub low_stock_threshold: i32,
    pub category_id: Option<CategoryId>,
    pub seller_id: String,
    pub brand: Option<String>,
    pub images: Vec<String>,
    pub attributes: Value,
    pub is_active: bool,
    pub is_featured: bool,
    pub rating: Decimal,
    pub review_count: i32,
    pub sold_count: i32,
    pub view_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
