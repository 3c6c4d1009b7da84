//! Create Category Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::categories::{data::NewCategory, records::CategoryId};

use crate::{
    categories::{errors::into_status_error, get::CategoryResponse},
    extensions::*,
    state::State,
    validate,
};

/// Create Category Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCategoryRequest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub parent_id: Option<i64>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,

    #[serde(default)]
    pub sort_order: i32,
}

fn default_is_active() -> bool {
    true
}

impl CreateCategoryRequest {
    fn validate(&self) -> Result<(), StatusError> {
        validate::non_empty_max("name", &self.name, 100)
    }
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        NewCategory {
            name: request.name,
            description: request.description,
            image: request.image,
            parent_id: request.parent_id.map(CategoryId::from_i64),
            is_active: request.is_active,
            sort_order: request.sort_order,
        }
    }
}

/// Create Category Handler
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::CONFLICT, description = "Category already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request.validate()?;

    let created = state
        .app
        .categories
        .create_category(request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/categories/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
