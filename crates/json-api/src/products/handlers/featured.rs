//! Featured Products Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::{
    categories::records::CategoryId,
    pagination::Page,
    products::{
        data::{ProductFilter, ProductSort},
        records::ProductRecord,
    },
};

use crate::{extensions::*, products::errors::into_status_error, state::State};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 50;

/// Storefront summary of a product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductSummaryResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub price: Decimal,
    pub compare_price: Option<Decimal>,
    pub stock: i32,
    pub images: Vec<String>,
    pub rating: Decimal,
    pub review_count: i32,
    pub is_featured: bool,
    pub category_id: Option<i64>,
}

impl From<ProductRecord> for ProductSummaryResponse {
    fn from(product: ProductRecord) -> Self {
        ProductSummaryResponse {
            id: product.id.into_i64(),
            name: product.name,
            slug: product.slug,
            price: product.price,
            compare_price: product.compare_price,
            stock: product.stock,
            images: product.images,
            rating: product.rating,
            review_count: product.review_count,
            is_featured: product.is_featured,
            category_id: product.category_id.map(CategoryId::into_i64),
        }
    }
}

/// Featured Products Handler
///
/// Returns the featured, active subset of the catalog.
#[endpoint(tags("products"), summary = "Featured Products")]
pub(crate) async fn handler(
    limit: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductSummaryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let limit = limit.into_inner().unwrap_or(DEFAULT_LIMIT);

    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(
            StatusError::bad_request().brief(format!("limit: must be between 1 and {MAX_LIMIT}"))
        );
    }

    let filter = ProductFilter {
        is_featured: Some(true),
        ..ProductFilter::default()
    };

    let (products, _total) = state
        .app
        .products
        .list_products(filter, ProductSort::default(), Page::new(0, limit))
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
