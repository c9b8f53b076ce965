//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakeshop_app::domain::carts::models::Cart;

use crate::{
    carts::errors::into_status_error, carts::get::CartItemResponse, extensions::*, state::State,
};

fn default_quantity() -> u32 {
    1
}

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product_uuid: Uuid,

    /// Desired quantity for the line. An existing line for the product has
    /// its quantity replaced, not incremented.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The lines in the cart
    pub items: Vec<CartItemResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            uuid: cart.uuid.into(),
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
        }
    }
}

/// Add Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Add Cart Item",
    security(("user_header" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Item added to cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let request = json.into_inner();

    let cart = state
        .app
        .carts
        .add_item(user, request.product_uuid.into(), request.quantity)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, "/cart", true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}
