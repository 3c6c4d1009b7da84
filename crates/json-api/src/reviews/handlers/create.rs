//! Create Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::{products::records::ProductId, reviews::data::NewReview};

use crate::{
    extensions::*,
    products::errors::into_status_error as product_error,
    reviews::{errors::into_status_error, index::ReviewResponse},
    state::State,
    validate,
};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    /// Star rating, 1 to 5
    pub rating: i32,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,
}

impl CreateReviewRequest {
    fn validate(&self) -> Result<(), StatusError> {
        validate::rating_range("rating", self.rating)?;

        if let Some(title) = &self.title {
            validate::max_len("title", title, 255)?;
        }

        Ok(())
    }
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        NewReview {
            rating: request.rating,
            title: request.title,
            comment: request.comment,
            images: request.images,
        }
    }
}

/// Create Review Handler
///
/// Persists the review and synchronously refreshes the product's cached
/// rating and review count.
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing caller identity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<CreateReviewRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::from_i64(id.into_inner());
    let user_id = req.user_id_or_401()?;
    let request = json.into_inner();

    request.validate()?;

    state
        .app
        .products
        .get_product(product)
        .await
        .map_err(product_error)?;

    // TODO: verify the purchase against the order service once it exposes a
    // lookup; until then nothing marks reviews as verified.
    let is_verified_purchase = false;

    let created = state
        .app
        .reviews
        .create_review(product, user_id, request.into(), is_verified_purchase)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
