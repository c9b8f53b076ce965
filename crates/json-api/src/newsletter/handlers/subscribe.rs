//! Subscribe Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bakeshop_app::domain::newsletter::models::{SubscribeOutcome, Subscription};

use crate::{extensions::*, newsletter::errors::into_status_error, state::State};

/// Subscribe Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscribeRequest {
    pub email: String,
}

/// Subscription Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscriptionResponse {
    /// The subscribed email address
    pub email: String,

    /// Whether the address was newly subscribed or already on the list
    pub outcome: String,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(subscription: Subscription) -> Self {
        let outcome = match subscription.outcome {
            SubscribeOutcome::Subscribed => "subscribed",
            SubscribeOutcome::AlreadySubscribed => "already_subscribed",
        };

        Self {
            email: subscription.subscriber.email,
            outcome: outcome.to_string(),
        }
    }
}

/// Subscribe Handler
///
/// Subscribes an email address, reactivating a lapsed subscription. Sits
/// outside the identity middleware; anyone can subscribe.
#[endpoint(
    tags("newsletter"),
    summary = "Subscribe",
    responses(
        (status_code = StatusCode::CREATED, description = "Subscribed"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid email address"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SubscribeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubscriptionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let subscription = state
        .app
        .newsletter
        .subscribe(json.into_inner().email)
        .await
        .map_err(into_status_error)?;

    let status = match subscription.outcome {
        SubscribeOutcome::Subscribed => StatusCode::CREATED,
        SubscribeOutcome::AlreadySubscribed => StatusCode::OK,
    };

    res.status_code(status);

    Ok(Json(subscription.into()))
}
