//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use vitrine_app::domain::products::records::ProductId;

use crate::{
    extensions::*, messages::MessageResponse, products::errors::into_status_error, state::State,
};

/// Delete Product Handler
///
/// Owner-only unless the caller's role header grants the bypass; an
/// ownership mismatch is answered with 404.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found or not owned"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing caller identity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let seller = req.ownership_scope()?;

    state
        .app
        .products
        .delete_product(ProductId::from_i64(id.into_inner()), seller)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vitrine_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{
        extensions::identity::{USER_ID_HEADER, USER_ROLE_HEADER},
        test_helpers::products_service,
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_scopes_to_owning_seller() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id, seller| id.into_i64() == 7 && seller.as_deref() == Some("seller-1"))
            .return_once(|_, _| Ok(()));

        let response: MessageResponse = TestClient::delete("http://example.com/products/7")
            .add_header(USER_ID_HEADER, "seller-1", true)
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.message, "Product deleted successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_admin_role_bypasses_ownership() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|_, seller| seller.is_none())
            .return_once(|_, _| Ok(()));

        let res = TestClient::delete("http://example.com/products/7")
            .add_header(USER_ID_HEADER, "admin-1", true)
            .add_header(USER_ROLE_HEADER, "ADMIN", true)
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_ownership_mismatch_reads_as_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotOwner));

        let res = TestClient::delete("http://example.com/products/7")
            .add_header(USER_ID_HEADER, "someone-else", true)
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
