//! Review Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakeshop_app::domain::reviews::models::Review;

use crate::{extensions::*, reviews::errors::into_status_error, state::State};

/// Review Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    /// The unique identifier of the review
    pub uuid: Uuid,

    /// Stars given, 1 through 5
    pub rating: u8,

    /// The review text
    pub comment: String,

    /// The date and time the review was left
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            uuid: review.uuid.into(),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at.to_string(),
        }
    }
}

/// Reviews Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewsResponse {
    /// The product's reviews, newest first
    pub reviews: Vec<ReviewResponse>,

    /// Number of reviews
    pub count: u64,

    /// Floor of the mean star rating, 0 for an unreviewed product
    pub mean_rating: u8,
}

/// Review Index Handler
///
/// Returns a product's reviews with their aggregate rating.
#[endpoint(
    tags("reviews"),
    summary = "List Reviews",
    security(("user_header" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner();

    let reviews = state
        .app
        .reviews
        .list_reviews(product.into())
        .await
        .map_err(into_status_error)?;

    let summary = state
        .app
        .reviews
        .rating_summary(product.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
        count: summary.count,
        mean_rating: summary.mean,
    }))
}
