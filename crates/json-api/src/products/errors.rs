//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use bakeshop_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::InvalidSalePrice => {
            StatusError::unprocessable_entity().brief("Sale price must be below the base price")
        }
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            StatusError::internal_server_error()
        }
        ProductsServiceError::InvalidPrice(source) => {
            error!("invalid stored price: {source}");

            StatusError::internal_server_error()
        }
    }
}
