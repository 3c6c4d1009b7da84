//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use vitrine_app::domain::{categories::records::CategoryId, products::data::NewProduct};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
    validate,
};

/// Create Product Request
///
/// The owner comes from the `X-User-Id` header, never from this body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub short_description: Option<String>,

    pub sku: String,

    pub price: Decimal,

    #[serde(default)]
    pub compare_price: Option<Decimal>,

    #[serde(default)]
    pub cost_price: Option<Decimal>,

    #[serde(default)]
    pub stock: i32,

    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i32,

    #[serde(default)]
    pub category_id: Option<i64>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default = "default_attributes")]
    pub attributes: Value,

    #[serde(default = "default_is_active")]
    pub is_active: bool,

    #[serde(default)]
    pub is_featured: bool,
}

fn default_low_stock_threshold() -> i32 {
    5
}

fn default_attributes() -> Value {
    Value::Object(serde_json::Map::new())
}

fn default_is_active() -> bool {
    true
}

impl CreateProductRequest {
    fn validate(&self) -> Result<(), StatusError> {
        validate::non_empty_max("name", &self.name, 255)?;
        validate::non_empty_max("sku", &self.sku, 50)?;
        validate::positive_money("price", self.price)?;

        if let Some(compare_price) = self.compare_price {
            validate::non_negative_money("compare_price", compare_price)?;
        }

        if let Some(cost_price) = self.cost_price {
            validate::non_negative_money("cost_price", cost_price)?;
        }

        validate::non_negative_int("stock", self.stock)?;
        validate::non_negative_int("low_stock_threshold", self.low_stock_threshold)?;

        if let Some(short_description) = &self.short_description {
            validate::max_len("short_description", short_description, 500)?;
        }

        if let Some(brand) = &self.brand {
            validate::max_len("brand", brand, 100)?;
        }

        Ok(())
    }
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            short_description: request.short_description,
            sku: request.sku,
            price: request.price,
            compare_price: request.compare_price,
            cost_price: request.cost_price,
            stock: request.stock,
            low_stock_threshold: request.low_stock_threshold,
            category_id: request.category_id.map(CategoryId::from_i64),
            brand: request.brand,
            images: request.images,
            attributes: request.attributes,
            is_active: request.is_active,
            is_featured: request.is_featured,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request or duplicate SKU"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing caller identity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let seller_id = req.user_id_or_401()?;
    let request = json.into_inner();

    request.validate()?;

    let created = state
        .app
        .products
        .create_product(request.into(), seller_id)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/products/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %created.id, sku = %created.sku, "created product");

    Ok(Json(created.into()))
}
