//! Update Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use vitrine_app::domain::{
    categories::records::CategoryId,
    products::{data::ProductUpdate, records::ProductId},
};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
    validate,
};

/// Update Product Request
///
/// Sparse patch: absent fields are left unmodified; `null` clears a nullable
/// field. Owner-only unless the caller's role header grants the bypass.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<Option<String>>,

    #[serde(default)]
    pub short_description: Option<Option<String>>,

    #[serde(default)]
    pub price: Option<Decimal>,

    #[serde(default)]
    pub compare_price: Option<Option<Decimal>>,

    #[serde(default)]
    pub cost_price: Option<Option<Decimal>>,

    #[serde(default)]
    pub stock: Option<i32>,

    #[serde(default)]
    pub low_stock_threshold: Option<i32>,

    #[serde(default)]
    pub category_id: Option<Option<i64>>,

    #[serde(default)]
    pub brand: Option<Option<String>>,

    #[serde(default)]
    pub images: Option<Vec<String>>,

    #[serde(default)]
    pub attributes: Option<Value>,

    #[serde(default)]
    pub is_active: Option<bool>,

    #[serde(default)]
    pub is_featured: Option<bool>,
}

impl UpdateProductRequest {
    fn validate(&self) -> Result<(), StatusError> {
        if let Some(name) = &self.name {
            validate::non_empty_max("name", name, 255)?;
        }

        if let Some(price) = self.price {
            validate::positive_money("price", price)?;
        }

        if let Some(Some(compare_price)) = self.compare_price {
            validate::non_negative_money("compare_price", compare_price)?;
        }

        if let Some(Some(cost_price)) = self.cost_price {
            validate::non_negative_money("cost_price", cost_price)?;
        }

        if let Some(stock) = self.stock {
            validate::non_negative_int("stock", stock)?;
        }

        if let Some(low_stock_threshold) = self.low_stock_threshold {
            validate::non_negative_int("low_stock_threshold", low_stock_threshold)?;
        }

        if let Some(Some(short_description)) = &self.short_description {
            validate::max_len("short_description", short_description, 500)?;
        }

        if let Some(Some(brand)) = &self.brand {
            validate::max_len("brand", brand, 100)?;
        }

        Ok(())
    }
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            description: request.description,
            short_description: request.short_description,
            price: request.price,
            compare_price: request.compare_price,
            cost_price: request.cost_price,
            stock: request.stock,
            low_stock_threshold: request.low_stock_threshold,
            category_id: request
                .category_id
                .map(|category| category.map(CategoryId::from_i64)),
            brand: request.brand,
            images: request.images,
            attributes: request.attributes,
            is_active: request.is_active,
            is_featured: request.is_featured,
        }
    }
}

/// Update Product Handler
///
/// An ownership mismatch is answered with 404, indistinguishable from a
/// missing product.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found or not owned"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing caller identity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateProductRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let seller = req.ownership_scope()?;
    let request = json.into_inner();

    request.validate()?;

    let updated = state
        .app
        .products
        .update_product(ProductId::from_i64(id.into_inner()), request.into(), seller)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
