//! Delete Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use vitrine_app::domain::categories::records::CategoryId;

use crate::{
    categories::errors::into_status_error, extensions::*, messages::MessageResponse, state::State,
};

/// Delete Category Handler
#[endpoint(
    tags("categories"),
    summary = "Delete Category",
    responses(
        (status_code = StatusCode::OK, description = "Category deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .categories
        .delete_category(CategoryId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
