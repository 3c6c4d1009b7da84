//! Category Tree Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::categories::records::CategoryTreeNode;

use crate::{
    categories::{errors::into_status_error, get::CategoryResponse},
    extensions::*,
    state::State,
};

/// An active root category with its direct subcategories.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryTreeResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub subcategories: Vec<CategoryResponse>,
}

impl From<CategoryTreeNode> for CategoryTreeResponse {
    fn from(node: CategoryTreeNode) -> Self {
        let category = CategoryResponse::from(node.category);

        CategoryTreeResponse {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            image: category.image,
            is_active: category.is_active,
            sort_order: category.sort_order,
            subcategories: node.subcategories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Category Tree Handler
///
/// Returns all active root categories with their subcategories.
#[endpoint(tags("categories"), summary = "Category Tree")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryTreeResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tree = state
        .app
        .categories
        .category_tree()
        .await
        .map_err(into_status_error)?;

    Ok(Json(tree.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vitrine_app::domain::categories::MockCategoriesService;

    use crate::test_helpers::{categories_service, make_category};

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(categories, Router::with_path("categories/tree").get(handler))
    }

    #[tokio::test]
    async fn test_tree_composes_subcategories() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories.expect_category_tree().once().return_once(|| {
            let mut child = make_category(2, "Headphones");
            child.parent_id = Some(make_category(1, "Audio").id);

            Ok(vec![CategoryTreeNode {
                category: make_category(1, "Audio"),
                subcategories: vec![child],
            }])
        });

        let response: Vec<CategoryTreeResponse> =
            TestClient::get("http://example.com/categories/tree")
                .send(&make_service(categories))
                .await
                .take_json()
                .await?;

        assert_eq!(response.len(), 1);
        assert_eq!(response[0].slug, "audio");
        assert_eq!(response[0].subcategories.len(), 1);
        assert_eq!(response[0].subcategories[0].parent_id, Some(1));

        Ok(())
    }
}
