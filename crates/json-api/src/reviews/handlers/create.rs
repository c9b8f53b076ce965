//! Create Review Handler

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

use bakeshop_app::domain::reviews::models::NewReview;

use crate::{
    extensions::*, reviews::errors::into_status_error, reviews::index::ReviewResponse,
    state::State,
};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub uuid: Uuid,

    /// Stars given, 1 through 5
    pub rating: u8,

    #[serde(default)]
    pub comment: String,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        NewReview {
            uuid: request.uuid.into(),
            rating: request.rating,
            comment: request.comment,
        }
    }
}

/// Create Review Handler
///
/// Leaves a star rating on a product. One review per shopper and product.
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    security(("user_header" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::CONFLICT, description = "Product already reviewed"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Rating out of range"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let review = state
        .app
        .reviews
        .create_review(user, product.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(review.into()))
}
