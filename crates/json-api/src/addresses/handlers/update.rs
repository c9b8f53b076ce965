//! Update Address Handler

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

use bakeshop_app::domain::addresses::models::AddressUpdate;

use crate::{
    addresses::errors::into_status_error, addresses::get::AddressResponse, extensions::*,
    state::State,
};

/// Update Address Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateAddressRequest {
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

impl From<UpdateAddressRequest> for AddressUpdate {
    fn from(request: UpdateAddressRequest) -> Self {
        AddressUpdate {
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

/// Update Address Handler
#[endpoint(
    tags("addresses"),
    summary = "Update Address",
    security(("user_header" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Address updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Address not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    address: PathParam<Uuid>,
    json: JsonBody<UpdateAddressRequest>,
    depot: &mut Depot,
) -> Result<Json<AddressResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let updated = state
        .app
        .addresses
        .update_address(user, address.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bakeshop_app::domain::addresses::{
        AddressesServiceError, MockAddressesService, models::AddressUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, addresses_service, make_address};

    use super::*;

    fn make_service(repo: MockAddressesService) -> Service {
        addresses_service(repo, Router::with_path("addresses/{address}").put(handler))
    }

    fn update_body() -> serde_json::Value {
        json!({
            "country": "Portugal",
            "first_name": "Maria",
            "last_name": "Silva",
            "street_address": "Rua Nova 2",
            "city": "Porto",
            "state": "Porto",
            "postcode": "4000-001",
            "email": "maria@example.com",
            "phone": "+351 912 345 678",
        })
    }

    #[tokio::test]
    async fn test_update_address_success() -> TestResult {
        let uuid = AddressUuid::new();

        let mut address = make_address(uuid, TEST_USER_UUID);
        address.city = "Porto".to_string();

        let mut repo = MockAddressesService::new();

        repo.expect_update_address()
            .once()
            .withf(move |user, u, update| {
                *user == TEST_USER_UUID && *u == uuid && update.city == "Porto"
            })
            .return_once(move |_, _, _| Ok(address));

        let response: AddressResponse =
            TestClient::put(format!("http://example.com/addresses/{uuid}"))
                .json(&update_body())
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        assert_eq!(response.city, "Porto");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_foreign_address_returns_404() -> TestResult {
        let uuid = AddressUuid::new();

        let mut repo = MockAddressesService::new();

        // Addresses owned by another user are invisible.
        repo.expect_update_address()
            .once()
            .return_once(|_, _, _| Err(AddressesServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/addresses/{uuid}"))
            .json(&update_body())
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
