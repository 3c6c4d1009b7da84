//! Get Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use vitrine_app::domain::{
    categories::records::CategoryId,
    products::records::{ProductId, ProductRecord},
};

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: i64,

    pub name: String,

    /// URL-safe identifier derived from the name
    pub slug: String,

    pub description: Option<String>,
    pub short_description: Option<String>,

    /// Seller-assigned stock keeping unit, globally unique
    pub sku: String,

    pub price: Decimal,
    pub compare_price: Option<Decimal>,
    pub cost_price: Option<Decimal>,

    pub stock: i32,
    pub low_stock_threshold: i32,

    pub category_id: Option<i64>,

    /// Opaque owner id from the external identity system
    pub seller_id: String,

    pub brand: Option<String>,

    /// Ordered image URLs
    pub images: Vec<String>,

    /// Free-form attribute map (color, size, …)
    pub attributes: Value,

    pub is_active: bool,
    pub is_featured: bool,

    /// Cached mean of approved review ratings, one fractional digit
    pub rating: Decimal,
    pub review_count: i32,
    pub sold_count: i32,
    pub view_count: i32,

    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            slug: product.slug,
            description: product.description,
            short_description: product.short_description,
            sku: product.sku,
            price: product.price,
            compare_price: product.compare_price,
            cost_price: product.cost_price,
            stock: product.stock,
            low_stock_threshold: product.low_stock_threshold,
            category_id: product.category_id.map(CategoryId::into_i64),
            seller_id: product.seller_id,
            brand: product.brand,
            images: product.images,
            attributes: product.attributes,
            is_active: product.is_active,
            is_featured: product.is_featured,
            rating: product.rating,
            review_count: product.review_count,
            sold_count: product.sold_count,
            view_count: product.view_count,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product by id. Incidentally bumps the product's view counter.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ProductId::from_i64(id.into_inner());

    let product = state
        .app
        .products
        .get_product(id)
        .await
        .map_err(into_status_error)?;

    state
        .app
        .products
        .increment_view_count(id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
