//! Get Address Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakeshop_app::domain::addresses::models::Address;

use crate::{addresses::errors::into_status_error, extensions::*, state::State};

/// Address Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressResponse {
    /// The unique identifier of the address
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

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            uuid: address.uuid.into(),
            country: address.country,
            first_name: address.first_name,
            last_name: address.last_name,
            company: address.company,
            street_address: address.street_address,
            apartment: address.apartment,
            city: address.city,
            state: address.state,
            postcode: address.postcode,
            email: address.email,
            phone: address.phone,
            order_notes: address.order_notes,
        }
    }
}

/// Get Address Handler
///
/// Returns the shopper's shipping address.
#[endpoint(
    tags("addresses"),
    summary = "Get Address",
    security(("user_header" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AddressResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let address = state
        .app
        .addresses
        .address_for_user(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(address.into()))
}
