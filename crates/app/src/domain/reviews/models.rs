//! Review models.

use jiff::Timestamp;

use crate::{
    domain::{products::models::ProductUuid, users::models::UserUuid},
    uuids::TypedUuid,
};

pub type ReviewUuid = TypedUuid<Review>;

/// A star rating left by a shopper. One per user and product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub uuid: ReviewUuid,
    pub product_uuid: ProductUuid,
    pub user_uuid: UserUuid,
    pub rating: u8,
    pub comment: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub uuid: ReviewUuid,
    pub rating: u8,
    pub comment: String,
}

/// Aggregate rating for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingSummary {
    pub count: u64,
    /// Floor of the mean rating, 0 for an unreviewed product.
    pub mean: u8,
}
