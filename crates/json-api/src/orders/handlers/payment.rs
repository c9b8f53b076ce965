//! Process Payment Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*, orders::errors::into_status_error, orders::get::CheckoutResponse, state::State,
};

/// Process Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProcessPaymentRequest {
    /// The chosen payment method
    pub payment_method: String,
}

/// Process Payment Handler
///
/// Marks the order's checkout as paid.
#[endpoint(
    tags("orders"),
    summary = "Process Payment",
    security(("user_header" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order already paid"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<ProcessPaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let checkout = state
        .app
        .orders
        .process_payment(
            user,
            order.into_inner().into(),
            json.into_inner().payment_method,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(checkout.into()))
}
