//! Unsubscribe Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, newsletter::errors::into_status_error, state::State};

/// Unsubscribe Handler
///
/// Deactivates a subscription. The subscriber row is kept so the address
/// can be reactivated later.
#[endpoint(
    tags("newsletter"),
    summary = "Unsubscribe",
    responses(
        (status_code = StatusCode::OK, description = "Unsubscribed"),
        (status_code = StatusCode::NOT_FOUND, description = "Email is not subscribed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    email: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .newsletter
        .unsubscribe(email.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use bakeshop_app::domain::newsletter::{MockNewsletterService, NewsletterServiceError};

    use crate::test_helpers::{make_subscriber, newsletter_service};

    use super::*;

    fn make_service(repo: MockNewsletterService) -> Service {
        newsletter_service(
            repo,
            Router::with_path("newsletter/subscriptions/{email}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_unsubscribe_success() -> TestResult {
        let mut repo = MockNewsletterService::new();

        repo.expect_unsubscribe()
            .once()
            .withf(|email| email == "maria@example.com")
            .return_once(|_| Ok(make_subscriber("maria@example.com", false)));

        let res = TestClient::delete(
            "http://example.com/newsletter/subscriptions/maria@example.com",
        )
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_unsubscribe_unknown_email_returns_404() -> TestResult {
        let mut repo = MockNewsletterService::new();

        repo.expect_unsubscribe()
            .once()
            .return_once(|_| Err(NewsletterServiceError::NotFound));

        let res = TestClient::delete(
            "http://example.com/newsletter/subscriptions/ghost@example.com",
        )
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
