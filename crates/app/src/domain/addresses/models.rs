//! Address models.

use jiff::Timestamp;

use crate::{domain::users::models::UserUuid, uuids::TypedUuid};

pub type AddressUuid = TypedUuid<Address>;

/// A shipping address captured by the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub uuid: AddressUuid,
    pub user_uuid: UserUuid,
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub uuid: AddressUuid,
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressUpdate {
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
