//! Review Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::{products::records::ProductId, reviews::records::ReviewRecord};

use crate::{
    extensions::*,
    pagination::{PageQuery, PaginatedResponse},
    products::errors::into_status_error as product_error,
    reviews::errors::into_status_error,
    state::State,
};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 50;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    /// The unique identifier of the review
    pub id: i64,

    pub product_id: i64,

    /// Opaque author id from the external identity system
    pub user_id: String,

    /// Star rating, 1 to 5
    pub rating: i32,

    pub title: Option<String>,
    pub comment: Option<String>,

    /// Ordered image URLs
    pub images: Vec<String>,

    pub is_verified_purchase: bool,

    /// Mutated by collaborators outside this service
    pub helpful_count: i32,

    pub created_at: String,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from(review: ReviewRecord) -> Self {
        ReviewResponse {
            id: review.id.into_i64(),
            product_id: review.product_id.into_i64(),
            user_id: review.user_id,
            rating: review.rating,
            title: review.title,
            comment: review.comment,
            images: review.images,
            is_verified_purchase: review.is_verified_purchase,
            helpful_count: review.helpful_count,
            created_at: review.created_at.to_string(),
        }
    }
}

/// Review Index Handler
///
/// Approved reviews for one product, newest first.
#[endpoint(
    tags("reviews"),
    summary = "List Product Reviews",
    responses(
        (status_code = StatusCode::OK, description = "Reviews for the product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    page: QueryParam<i64, false>,
    limit: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<PaginatedResponse<ReviewResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::from_i64(id.into_inner());
    let page = PageQuery::resolve(
        page.into_inner(),
        limit.into_inner(),
        DEFAULT_LIMIT,
        MAX_LIMIT,
    )?;

    // 404 before paging when the product itself is missing.
    state
        .app
        .products
        .get_product(product)
        .await
        .map_err(product_error)?;

    let (reviews, total) = state
        .app
        .reviews
        .list_reviews(product, page.window())
        .await
        .map_err(into_status_error)?;

    let items = reviews.into_iter().map(Into::into).collect();

    Ok(Json(page.envelope(items, total)))
}
