//! Newsletter Errors

use salvo::http::StatusError;
use tracing::error;

use bakeshop_app::domain::newsletter::NewsletterServiceError;

pub(crate) fn into_status_error(error: NewsletterServiceError) -> StatusError {
    match error {
        NewsletterServiceError::AlreadyExists => {
            StatusError::conflict().brief("Already subscribed")
        }
        NewsletterServiceError::NotFound => {
            StatusError::not_found().brief("Email is not subscribed")
        }
        NewsletterServiceError::InvalidEmail => {
            StatusError::unprocessable_entity().brief("Invalid email address")
        }
        NewsletterServiceError::MissingRequiredData | NewsletterServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid subscription payload")
        }
        NewsletterServiceError::Sql(source) => {
            error!("newsletter storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
