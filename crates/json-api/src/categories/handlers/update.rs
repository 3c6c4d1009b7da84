//! Update Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::categories::{data::CategoryUpdate, records::CategoryId};

use crate::{
    categories::{errors::into_status_error, get::CategoryResponse},
    extensions::*,
    state::State,
    validate,
};

/// Update Category Request
///
/// Sparse patch: absent fields are left unmodified; `null` clears a nullable
/// field.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<Option<String>>,

    #[serde(default)]
    pub image: Option<Option<String>>,

    #[serde(default)]
    pub parent_id: Option<Option<i64>>,

    #[serde(default)]
    pub is_active: Option<bool>,

    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl UpdateCategoryRequest {
    fn validate(&self) -> Result<(), StatusError> {
        if let Some(name) = &self.name {
            validate::non_empty_max("name", name, 100)?;
        }

        Ok(())
    }
}

impl From<UpdateCategoryRequest> for CategoryUpdate {
    fn from(request: UpdateCategoryRequest) -> Self {
        CategoryUpdate {
            name: request.name,
            description: request.description,
            image: request.image,
            parent_id: request
                .parent_id
                .map(|parent| parent.map(CategoryId::from_i64)),
            is_active: request.is_active,
            sort_order: request.sort_order,
        }
    }
}

/// Update Category Handler
#[endpoint(
    tags("categories"),
    summary = "Update Category",
    responses(
        (status_code = StatusCode::OK, description = "Category updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateCategoryRequest>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request.validate()?;

    let updated = state
        .app
        .categories
        .update_category(CategoryId::from_i64(id.into_inner()), request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vitrine_app::domain::categories::{CategoriesServiceError, MockCategoriesService};

    use crate::test_helpers::{categories_service, make_category};

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(categories, Router::with_path("categories/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_forwards_sparse_patch() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_update_category()
            .once()
            .withf(|id, update| {
                id.into_i64() == 7
                    && *update
                        == CategoryUpdate {
                            sort_order: Some(3),
                            description: Some(None),
                            ..CategoryUpdate::default()
                        }
            })
            .return_once(|_, _| Ok(make_category(7, "Phones")));

        let res = TestClient::put("http://example.com/categories/7")
            .json(&json!({ "sort_order": 3, "description": null }))
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_rename_returns_new_slug() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_update_category()
            .once()
            .withf(|_, update| update.name.as_deref() == Some("Mobile Phones"))
            .return_once(|_, _| Ok(make_category(7, "Mobile Phones")));

        let response: CategoryResponse = TestClient::put("http://example.com/categories/7")
            .json(&json!({ "name": "Mobile Phones" }))
            .send(&make_service(categories))
            .await
            .take_json()
            .await?;

        assert_eq!(response.slug, "mobile-phones");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_category_returns_404() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_update_category()
            .once()
            .return_once(|_, _| Err(CategoriesServiceError::NotFound));

        let res = TestClient::put("http://example.com/categories/7")
            .json(&json!({ "sort_order": 3 }))
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
