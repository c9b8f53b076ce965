//! Newsletter Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::newsletter::models::{NewsletterSubscriber, SubscriberUuid};

const FIND_SUBSCRIBER_SQL: &str = include_str!("sql/find_subscriber.sql");
const CREATE_SUBSCRIBER_SQL: &str = include_str!("sql/create_subscriber.sql");
const SET_SUBSCRIBER_ACTIVE_SQL: &str = include_str!("sql/set_subscriber_active.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgNewsletterRepository;

impl PgNewsletterRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_subscriber(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<NewsletterSubscriber>, sqlx::Error> {
        query_as::<Postgres, NewsletterSubscriber>(FIND_SUBSCRIBER_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_subscriber(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subscriber: SubscriberUuid,
        email: &str,
    ) -> Result<NewsletterSubscriber, sqlx::Error> {
        query_as::<Postgres, NewsletterSubscriber>(CREATE_SUBSCRIBER_SQL)
            .bind(subscriber.into_uuid())
            .bind(email)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_subscriber_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
        is_active: bool,
    ) -> Result<Option<NewsletterSubscriber>, sqlx::Error> {
        query_as::<Postgres, NewsletterSubscriber>(SET_SUBSCRIBER_ACTIVE_SQL)
            .bind(email)
            .bind(is_active)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for NewsletterSubscriber {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SubscriberUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            is_active: row.try_get("is_active")?,
            subscribed_at: row.try_get::<SqlxTimestamp, _>("subscribed_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
