//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use bakeshop_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::MissingAddress => {
            StatusError::unprocessable_entity().brief("No shipping address on file")
        }
        OrdersServiceError::EmptyCart => {
            StatusError::unprocessable_entity().brief("Cart is empty")
        }
        OrdersServiceError::NoCartAvailable => {
            StatusError::unprocessable_entity().brief("No cart available to check out")
        }
        OrdersServiceError::AlreadyPaid => {
            StatusError::conflict().brief("Order is already paid")
        }
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Pricing(source) => {
            error!("failed to price order: {source}");

            StatusError::internal_server_error()
        }
    }
}
