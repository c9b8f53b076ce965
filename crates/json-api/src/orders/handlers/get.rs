//! Get Order Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakeshop_app::domain::orders::models::{Checkout, Order, OrderDetails};

use crate::{
    carts::get::CartItemResponse, extensions::*, orders::errors::into_status_error, state::State,
};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The order status
    pub status: String,

    /// Sum of line totals, frozen at checkout, in minor units
    pub subtotal: u64,

    /// Shipping frozen at checkout, in minor units
    pub shipping: u64,

    /// Discount frozen at checkout, in minor units
    pub discount: u64,

    /// Amount due, frozen at checkout, in minor units
    pub total: u64,

    /// The date and time the order was placed
    pub placed_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            uuid: order.uuid.into(),
            status: order.status.as_str().to_string(),
            subtotal: order.subtotal,
            shipping: order.shipping,
            discount: order.discount,
            total: order.total,
            placed_at: order.placed_at.to_string(),
        }
    }
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// The unique identifier of the checkout
    pub uuid: Uuid,

    /// The payment status
    pub payment_status: String,

    /// The payment method, once one was chosen
    pub payment_method: Option<String>,

    /// The processor transaction id, once payment completed
    pub transaction_id: Option<String>,

    /// Amount due in minor units
    pub total: u64,
}

impl From<Checkout> for CheckoutResponse {
    fn from(checkout: Checkout) -> Self {
        Self {
            uuid: checkout.uuid.into(),
            payment_status: checkout.payment_status.as_str().to_string(),
            payment_method: checkout.payment_method,
            transaction_id: checkout.transaction_id,
            total: checkout.total,
        }
    }
}

/// Order Details Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderDetailsResponse {
    /// The order with its frozen amounts
    pub order: OrderResponse,

    /// The order's line items
    pub items: Vec<CartItemResponse>,

    /// The order's payment state
    pub checkout: CheckoutResponse,
}

impl From<OrderDetails> for OrderDetailsResponse {
    fn from(details: OrderDetails) -> Self {
        Self {
            order: details.order.into(),
            items: details
                .items
                .into_iter()
                .map(CartItemResponse::from)
                .collect(),
            checkout: details.checkout.into(),
        }
    }
}

/// Get Order Handler
///
/// Returns one of the shopper's orders with its lines and payment state.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("user_header" = []))
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderDetailsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let details = state
        .app
        .orders
        .get_order(user, order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(details.into()))
}
