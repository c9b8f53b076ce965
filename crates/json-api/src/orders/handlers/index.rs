//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*, orders::errors::into_status_error, orders::get::OrderResponse, state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The shopper's orders, most recently placed first
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
///
/// Returns the shopper's order history.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("user_header" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bakeshop_app::domain::orders::{MockOrdersService, models::OrderUuid};

    use crate::test_helpers::{TEST_USER_UUID, make_order, orders_service};

    use super::*;

    fn make_service(repo: MockOrdersService) -> Service {
        orders_service(repo, Router::with_path("orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_orders() -> TestResult {
        let uuid_a = OrderUuid::new();
        let uuid_b = OrderUuid::new();

        let mut repo = MockOrdersService::new();

        repo.expect_list_orders()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| {
                Ok(vec![
                    make_order(uuid_b, TEST_USER_UUID),
                    make_order(uuid_a, TEST_USER_UUID),
                ])
            });

        let response: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.orders.len(), 2, "expected two orders");
        assert_eq!(response.orders[0].uuid, uuid_b.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_history() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_list_orders().once().return_once(|_| Ok(vec![]));

        let response: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert!(response.orders.is_empty());

        Ok(())
    }
}
