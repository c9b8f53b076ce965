//! Review Errors

use salvo::http::StatusError;
use tracing::error;

use bakeshop_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::AlreadyReviewed => {
            StatusError::conflict().brief("Product already reviewed")
        }
        ReviewsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ReviewsServiceError::InvalidRating => {
            StatusError::unprocessable_entity().brief("Rating must be between 1 and 5")
        }
        ReviewsServiceError::InvalidReference
        | ReviewsServiceError::MissingRequiredData
        | ReviewsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid review payload")
        }
        ReviewsServiceError::Sql(source) => {
            error!("review storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
