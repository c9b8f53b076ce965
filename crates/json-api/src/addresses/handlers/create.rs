//! Create Address Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakeshop_app::domain::addresses::models::NewAddress;

use crate::{
    addresses::errors::into_status_error, addresses::get::AddressResponse, extensions::*,
    state::State,
};

/// Create Address Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateAddressRequest {
    pub uuid: Uuid,
    pub country: String,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub street_address: String,
    pub apartment: Option<String>,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub email: String,
    pub phone: String,
    pub order_notes: Option<String>,
}

impl From<CreateAddressRequest> for NewAddress {
    fn from(request: CreateAddressRequest) -> Self {
        NewAddress {
            uuid: request.uuid.into(),
            country: request.country,
            first_name: request.first_name,
            last_name: request.last_name,
            company: request.company,
            street_address: request.street_address,
            apartment: request.apartment,
            city: request.city,
            state: request.state,
            postcode: request.postcode,
            email: request.email,
            phone: request.phone,
            order_notes: request.order_notes,
        }
    }
}

/// Create Address Handler
#[endpoint(
    tags("addresses"),
    summary = "Create Address",
    security(("user_header" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Address created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAddressRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AddressResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let address = state
        .app
        .addresses
        .create_address(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let uuid = address.uuid;

    res.add_header(LOCATION, format!("/addresses/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(address.into()))
}
