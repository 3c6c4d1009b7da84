//! Get Product By Slug Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Get Product By Slug Handler
///
/// Returns a product by slug. Incidentally bumps the product's view counter.
#[endpoint(
    tags("products"),
    summary = "Get Product By Slug",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product_by_slug(slug.into_inner())
        .await
        .map_err(into_status_error)?;

    state
        .app
        .products
        .increment_view_count(product.id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vitrine_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(
            products,
            Router::with_path("products/slug/{slug}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_slug_lookup_bumps_view_count() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product_by_slug()
            .once()
            .withf(|slug| slug == "wireless-keyboard")
            .return_once(|_| Ok(make_product(7, "Wireless Keyboard", "seller-1")));

        products
            .expect_increment_view_count()
            .once()
            .withf(|id| id.into_i64() == 7)
            .return_once(|_| Ok(()));

        let response: ProductResponse =
            TestClient::get("http://example.com/products/slug/wireless-keyboard")
                .send(&make_service(products))
                .await
                .take_json()
                .await?;

        assert_eq!(response.id, 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_slug_lookup_miss_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product_by_slug()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        products.expect_increment_view_count().never();

        let res = TestClient::get("http://example.com/products/slug/ghost")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
