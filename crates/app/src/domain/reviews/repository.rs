//! Reviews Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    products::models::ProductUuid,
    reviews::models::{NewReview, Review, ReviewUuid},
    users::models::UserUuid,
};

const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const LIST_REVIEWS_SQL: &str = include_str!("sql/list_reviews.sql");
const RATING_SUMMARY_SQL: &str = include_str!("sql/rating_summary.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Inserts a review for a live product. Returns `None` when the product
    /// is unknown or withdrawn.
    pub(crate) async fn create_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        product: ProductUuid,
        review: &NewReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(CREATE_REVIEW_SQL)
            .bind(review.uuid.into_uuid())
            .bind(product.into_uuid())
            .bind(user.into_uuid())
            .bind(i32::from(review.rating))
            .bind(&review.comment)
            .fetch_optional(&mut **tx)
            .await
    }

    /// A product's reviews, newest first.
    pub(crate) async fn list_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(LIST_REVIEWS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Review count and rating sum for a product.
    pub(crate) async fn rating_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<(u64, u64), sqlx::Error> {
        let row = query(RATING_SUMMARY_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        let count = try_get_db_count(&row, "review_count")?;
        let sum = try_get_db_count(&row, "rating_sum")?;

        Ok((count, sum))
    }
}

fn try_get_db_count(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let count_i64: i64 = row.try_get(col)?;

    u64::try_from(count_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

fn try_get_db_rating(row: &PgRow, col: &str) -> Result<u8, sqlx::Error> {
    let rating_i32: i32 = row.try_get(col)?;

    u8::try_from(rating_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for Review {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ReviewUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            rating: try_get_db_rating(row, "rating")?,
            comment: row.try_get("comment")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
