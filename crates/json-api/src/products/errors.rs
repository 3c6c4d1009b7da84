//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use vitrine_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::DuplicateSku => StatusError::bad_request().brief("SKU already exists"),
        ProductsServiceError::InsufficientStock => {
            StatusError::bad_request().brief("Insufficient stock")
        }
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        // NotOwner is deliberately indistinguishable from NotFound on the
        // wire so non-owners cannot probe for existence.
        ProductsServiceError::NotFound | ProductsServiceError::NotOwner => {
            StatusError::not_found().brief("Product not found")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
