//! Reviews service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::models::ProductUuid,
        reviews::{
            errors::ReviewsServiceError,
            models::{NewReview, RatingSummary, Review},
            repository::PgReviewsRepository,
        },
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    reviews_repository: PgReviewsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            reviews_repository: PgReviewsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn create_review(
        &self,
        user: UserUuid,
        product: ProductUuid,
        review: NewReview,
    ) -> Result<Review, ReviewsServiceError> {
        if !(1..=5).contains(&review.rating) {
            return Err(ReviewsServiceError::InvalidRating);
        }

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .reviews_repository
            .create_review(&mut tx, user, product, &review)
            .await?;

        let Some(created) = created else {
            return Err(ReviewsServiceError::NotFound);
        };

        tx.commit().await?;

        Ok(created)
    }

    async fn list_reviews(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<Review>, ReviewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let reviews = self.reviews_repository.list_reviews(&mut tx, product).await?;

        tx.commit().await?;

        Ok(reviews)
    }

    async fn rating_summary(
        &self,
        product: ProductUuid,
    ) -> Result<RatingSummary, ReviewsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let (count, sum) = self
            .reviews_repository
            .rating_totals(&mut tx, product)
            .await?;

        tx.commit().await?;

        if count == 0 {
            return Ok(RatingSummary::default());
        }

        // Floor of the mean; the rating range makes the conversion total.
        let mean =
            u8::try_from(sum / count).map_err(|_| ReviewsServiceError::InvalidData)?;

        Ok(RatingSummary { count, mean })
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Leave a star rating on a product. One review per user and product.
    async fn create_review(
        &self,
        user: UserUuid,
        product: ProductUuid,
        review: NewReview,
    ) -> Result<Review, ReviewsServiceError>;

    /// A product's reviews, newest first.
    async fn list_reviews(&self, product: ProductUuid)
    -> Result<Vec<Review>, ReviewsServiceError>;

    /// Review count and floored mean stars for a product.
    async fn rating_summary(
        &self,
        product: ProductUuid,
    ) -> Result<RatingSummary, ReviewsServiceError>;
}
