//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakeshop_app::domain::carts::models::{CartItem, CartSummary};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart line
    pub uuid: Uuid,

    /// The product the line references
    pub product_uuid: Uuid,

    /// The product title at the time of display
    pub title: String,

    /// The unit price in minor units, the sale price when one is active
    pub unit_price: u64,

    /// The quantity on the line
    pub quantity: u32,

    /// The line total in minor units
    pub line_total: u64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        let line_total = item.line_total();

        Self {
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            title: item.title,
            unit_price: item.unit_price,
            quantity: item.quantity,
            line_total,
        }
    }
}

/// Cart Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartSummaryResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The lines in the cart
    pub items: Vec<CartItemResponse>,

    /// Total number of units across all lines
    pub item_count: u64,

    /// Sum of line totals in minor units
    pub subtotal: u64,

    /// Shipping quoted for the cart in minor units
    pub shipping: u64,

    /// Discount quoted for the cart in minor units
    pub discount: u64,

    /// Amount due in minor units
    pub total: u64,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        let item_count = summary.item_count();

        Self {
            uuid: summary.cart.uuid.into(),
            items: summary
                .cart
                .items
                .into_iter()
                .map(CartItemResponse::from)
                .collect(),
            item_count,
            subtotal: summary.subtotal,
            shipping: summary.shipping,
            discount: summary.discount,
            total: summary.total,
        }
    }
}

/// Get Cart Handler
///
/// Returns the shopper's cart with quoted totals, creating an empty cart
/// when none exists.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    security(("user_header" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let summary = state
        .app
        .carts
        .cart_summary(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bakeshop_app::domain::{
        carts::{CartsServiceError, MockCartsService, models::CartUuid},
        products::models::ProductUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, carts_service, make_cart, make_cart_item};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("cart").get(handler))
    }

    #[tokio::test]
    async fn test_get_empty_cart_returns_zero_totals() -> TestResult {
        let uuid = CartUuid::new();
        let cart = make_cart(uuid, TEST_USER_UUID);

        let mut repo = MockCartsService::new();

        repo.expect_cart_summary()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| {
                Ok(CartSummary {
                    cart,
                    subtotal: 0,
                    shipping: 0,
                    discount: 0,
                    total: 0,
                })
            });

        let response: CartSummaryResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert!(response.items.is_empty());
        assert_eq!(response.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_cart_reports_quoted_totals() -> TestResult {
        let uuid = CartUuid::new();
        let product = ProductUuid::new();

        let mut cart = make_cart(uuid, TEST_USER_UUID);
        cart.items = vec![make_cart_item(uuid, product, 2)];

        let mut repo = MockCartsService::new();

        repo.expect_cart_summary()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| {
                Ok(CartSummary {
                    cart,
                    subtotal: 24_00,
                    shipping: 5_00,
                    discount: 0,
                    total: 29_00,
                })
            });

        let response: CartSummaryResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.items.len(), 1, "expected one line");
        assert_eq!(response.items[0].line_total, 24_00);
        assert_eq!(response.item_count, 2);
        assert_eq!(response.subtotal, 24_00);
        assert_eq!(response.shipping, 5_00);
        assert_eq!(response.total, 29_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_cart_integrity_error_returns_409() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_cart_summary()
            .once()
            .return_once(|_| Err(CartsServiceError::MultipleCarts));

        let res = TestClient::get("http://example.com/cart")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
