//! Get Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::categories::records::{CategoryId, CategoryRecord};

use crate::{categories::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub id: i64,

    /// Display name
    pub name: String,

    /// URL-safe identifier derived from the name
    pub slug: String,

    pub description: Option<String>,

    /// Image URL or symbolic placeholder
    pub image: Option<String>,

    /// Parent category id; null for root categories
    pub parent_id: Option<i64>,

    pub is_active: bool,

    /// Primary sort key among siblings
    pub sort_order: i32,

    /// The date and time the category was created
    pub created_at: String,

    /// The date and time the category was last updated
    pub updated_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            id: category.id.into_i64(),
            name: category.name,
            slug: category.slug,
            description: category.description,
            image: category.image,
            parent_id: category.parent_id.map(CategoryId::into_i64),
            is_active: category.is_active,
            sort_order: category.sort_order,
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
        }
    }
}

/// Get Category Handler
///
/// Returns a category by id.
#[endpoint(
    tags("categories"),
    summary = "Get Category",
    responses(
        (status_code = StatusCode::OK, description = "Category found"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = state
        .app
        .categories
        .get_category(CategoryId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(category.into()))
}
