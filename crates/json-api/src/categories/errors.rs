//! Category Errors

use salvo::http::StatusError;
use tracing::error;

use vitrine_app::domain::categories::CategoriesServiceError;

pub(crate) fn into_status_error(error: CategoriesServiceError) -> StatusError {
    match error {
        CategoriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Category already exists")
        }
        CategoriesServiceError::InvalidReference
        | CategoriesServiceError::MissingRequiredData
        | CategoriesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid category payload")
        }
        CategoriesServiceError::NotFound => StatusError::not_found().brief("Category not found"),
        CategoriesServiceError::Sql(source) => {
            error!("category storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
