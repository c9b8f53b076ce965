//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use bakeshop_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart already exists"),
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::InvalidQuantity => {
            StatusError::unprocessable_entity().brief("Quantity must be at least one")
        }
        CartsServiceError::AmbiguousItem => {
            StatusError::conflict().brief("Product appears on more than one cart line")
        }
        CartsServiceError::MultipleCarts => {
            StatusError::conflict().brief("More than one open cart")
        }
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => StatusError::bad_request().brief("Invalid cart payload"),
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Pricing(source) => {
            error!("failed to price cart: {source}");

            StatusError::internal_server_error()
        }
    }
}
