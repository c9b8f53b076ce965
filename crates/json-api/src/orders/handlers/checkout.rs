//! Checkout Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use bakeshop_app::domain::orders::models::PlacementOutcome;

use crate::{
    extensions::*, orders::errors::into_status_error, orders::get::OrderResponse, state::State,
};

/// Checkout Handler
///
/// Turns the shopper's cart into an order, answering 201. Checking out again
/// before paying resumes the pending order with a 200 instead of creating a
/// duplicate.
#[endpoint(
    tags("orders"),
    summary = "Checkout",
    security(("user_header" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::OK, description = "Pending order resumed"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Empty cart or missing address"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let placement = state
        .app
        .orders
        .place_order(user)
        .await
        .map_err(into_status_error)?;

    let uuid = placement.order.uuid;

    match placement.outcome {
        PlacementOutcome::Placed => {
            res.add_header(LOCATION, format!("/orders/{uuid}"), true)
                .or_500("failed to set location header")?
                .status_code(StatusCode::CREATED);

            tracing::info!(order_uuid = %uuid, "order placed");
        }
        PlacementOutcome::Resumed => {
            res.status_code(StatusCode::OK);

            tracing::info!(order_uuid = %uuid, "pending order resumed");
        }
    }

    Ok(Json(placement.order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bakeshop_app::domain::orders::{
        MockOrdersService, OrdersServiceError,
        models::{OrderUuid, Placement},
    };

    use crate::test_helpers::{TEST_USER_UUID, make_order, orders_service};

    use super::*;

    fn make_service(repo: MockOrdersService) -> Service {
        orders_service(repo, Router::with_path("checkout").post(handler))
    }

    #[tokio::test]
    async fn test_checkout_success() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid, TEST_USER_UUID);

        let mut repo = MockOrdersService::new();

        repo.expect_place_order()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| {
                Ok(Placement {
                    order,
                    outcome: PlacementOutcome::Placed,
                })
            });

        let mut res = TestClient::post("http://example.com/checkout")
            .send(&make_service(repo))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/orders/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.total, 29_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_returns_422() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_place_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::EmptyCart));

        let res = TestClient::post("http://example.com/checkout")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_without_address_returns_422() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_place_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::MissingAddress));

        let res = TestClient::post("http://example.com/checkout")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_resumes_pending_order() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid, TEST_USER_UUID);

        let mut repo = MockOrdersService::new();

        // A second checkout before payment returns the same pending order.
        repo.expect_place_order()
            .once()
            .return_once(move |_| {
                Ok(Placement {
                    order,
                    outcome: PlacementOutcome::Resumed,
                })
            });

        let mut res = TestClient::post("http://example.com/checkout")
            .send(&make_service(repo))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location");

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(location.is_none(), "resume points at no new resource");
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.status, "pending");

        Ok(())
    }
}
