//! Product Index Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{oapi::extract::QueryParam, prelude::*};

use vitrine_app::domain::{
    categories::records::CategoryId,
    products::data::{ProductFilter, ProductSort, ProductSortKey, SortDirection},
};

use crate::{
    extensions::*,
    pagination::{PageQuery, PaginatedResponse},
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Product Index Handler
///
/// Filter, search, sort, and paginate products. `total` always reflects the
/// full match count for the filter, independent of the page window.
#[endpoint(tags("products"), summary = "List Products")]
#[expect(clippy::too_many_arguments, reason = "one parameter per query filter")]
pub(crate) async fn handler(
    page: QueryParam<i64, false>,
    limit: QueryParam<i64, false>,
    category_id: QueryParam<i64, false>,
    brand: QueryParam<String, false>,
    min_price: QueryParam<Decimal, false>,
    max_price: QueryParam<Decimal, false>,
    is_featured: QueryParam<bool, false>,
    search: QueryParam<String, false>,
    sort_by: QueryParam<String, false>,
    sort_order: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<PaginatedResponse<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let page = PageQuery::resolve(
        page.into_inner(),
        limit.into_inner(),
        DEFAULT_LIMIT,
        MAX_LIMIT,
    )?;

    let filter = ProductFilter {
        category_id: category_id.into_inner().map(CategoryId::from_i64),
        brand: brand.into_inner(),
        min_price: min_price.into_inner(),
        max_price: max_price.into_inner(),
        is_featured: is_featured.into_inner(),
        search: search.into_inner(),
        ..ProductFilter::default()
    };

    let sort = ProductSort {
        key: sort_by
            .into_inner()
            .as_deref()
            .map(ProductSortKey::parse)
            .unwrap_or_default(),
        direction: sort_order
            .into_inner()
            .as_deref()
            .map(SortDirection::parse)
            .unwrap_or_default(),
    };

    let (products, total) = state
        .app
        .products
        .list_products(filter, sort, page.window())
        .await
        .map_err(into_status_error)?;

    let items = products.into_iter().map(Into::into).collect();

    Ok(Json(page.envelope(items, total)))
}
