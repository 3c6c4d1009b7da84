//! Category Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use vitrine_app::domain::categories::{
    data::CategoryFilter,
    records::CategoryId,
};

use crate::{
    categories::{errors::into_status_error, get::CategoryResponse},
    extensions::*,
    pagination::resolve_window,
    state::State,
};

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 100;

/// Category Index Handler
///
/// Returns categories for one parent — root categories unless `parent_id`
/// is given.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(
    parent_id: QueryParam<i64, false>,
    is_active: QueryParam<bool, false>,
    skip: QueryParam<i64, false>,
    limit: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let page = resolve_window(skip.into_inner(), limit.into_inner(), DEFAULT_LIMIT, MAX_LIMIT)?;

    let filter = CategoryFilter {
        parent_id: parent_id.into_inner().map(CategoryId::from_i64),
        is_active: Some(is_active.into_inner().unwrap_or(true)),
    };

    let categories = state
        .app
        .categories
        .list_categories(filter, page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
