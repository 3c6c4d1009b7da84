//! Products Data

use rust_decimal::Decimal;
use serde_json::Value;

use crate::domain::categories::records::CategoryId;

/// New Product Data
///
/// The seller is taken from the caller context, never from this payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub sku: String,
    pub price: Decimal,
    pub compare_price: Option<Decimal>,
    pub cost_price: Option<Decimal>,
    pub stock: i32,
    pub low_stock_threshold: i32,
    pub category_id: Option<CategoryId>,
    pub brand: Option<String>,
    pub images: Vec<String>,
    pub attributes: Value,
    pub is_active: bool,
    pub is_featured: bool,
}

/// Product Update Data
///
/// Sparse patch: outer `None` leaves the column untouched. For nullable
/// columns the inner `Option` distinguishes "set to null" from a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub short_description: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub compare_price: Option<Option<Decimal>>,
    pub cost_price: Option<Option<Decimal>>,
    pub stock: Option<i32>,
    pub low_stock_threshold: Option<i32>,
    pub category_id: Option<Option<CategoryId>>,
    pub brand: Option<Option<String>>,
    pub images: Option<Vec<String>>,
    pub attributes: Option<Value>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

/// Product list filter. Dimensions combine with logical AND.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    pub is_active: Option<bool>,
    pub category_id: Option<CategoryId>,
    pub seller_id: Option<String>,
    /// Case-insensitive substring match.
    pub brand: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub is_featured: Option<bool>,
    /// Case-insensitive substring match against name, description, and sku.
    pub search: Option<String>,
}

impl Default for ProductFilter {
    /// Inactive products are excluded unless explicitly requested.
    fn default() -> Self {
        Self {
            is_active: Some(true),
            category_id: None,
            seller_id: None,
            brand: None,
            min_price: None,
            max_price: None,
            is_featured: None,
            search: None,
        }
    }
}

/// Caller-selectable sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSortKey {
    #[default]
    CreatedAt,
    Price,
    Rating,
    SoldCount,
    Name,
}

impl ProductSortKey {
    /// Parse a caller-supplied key; anything unrecognized falls back to
    /// `created_at`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "price" => Self::Price,
            "rating" => Self::Rating,
            "sold_count" => Self::SoldCount,
            "name" => Self::Name,
            _ => Self::CreatedAt,
        }
    }

    pub(crate) fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Price => "price",
            Self::Rating => "rating",
            Self::SoldCount => "sold_count",
            Self::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parse a caller-supplied direction; anything unrecognized falls back
    /// to descending.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Product list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductSort {
    pub key: ProductSortKey,
    pub direction: SortDirection,
}
