//! Adjust Stock Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::products::records::ProductId;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Stock Adjusted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockResponse {
    pub message: String,

    /// Stock level after the adjustment
    pub new_stock: i32,
}

/// Adjust Stock Handler
///
/// Adds the signed `quantity` to the product's stock; refused with 400 when
/// the result would be negative. Called by order fulfilment.
#[endpoint(
    tags("products"),
    summary = "Adjust Stock",
    responses(
        (status_code = StatusCode::OK, description = "Stock updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Insufficient stock"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    quantity: QueryParam<i32, true>,
    depot: &mut Depot,
) -> Result<Json<StockResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let updated = state
        .app
        .products
        .adjust_stock(ProductId::from_i64(id.into_inner()), quantity.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(StockResponse {
        message: "Stock updated".to_string(),
        new_stock: updated.stock,
    }))
}
