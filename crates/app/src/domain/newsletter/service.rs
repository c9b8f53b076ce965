//! Newsletter service.

use async_trait::async_trait;
use mockall::automock;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    database::Db,
    domain::newsletter::{
        errors::NewsletterServiceError,
        models::{NewsletterSubscriber, SubscribeOutcome, SubscriberUuid, Subscription},
        repository::PgNewsletterRepository,
    },
};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("valid email regex")
});

#[derive(Debug, Clone)]
pub struct PgNewsletterService {
    db: Db,
    newsletter_repository: PgNewsletterRepository,
}

impl PgNewsletterService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            newsletter_repository: PgNewsletterRepository::new(),
        }
    }
}

#[async_trait]
impl NewsletterService for PgNewsletterService {
    async fn subscribe(&self, email: String) -> Result<Subscription, NewsletterServiceError> {
        if !EMAIL.is_match(&email) {
            return Err(NewsletterServiceError::InvalidEmail);
        }

        let mut tx = self.db.begin_transaction().await?;

        let existing = self
            .newsletter_repository
            .find_subscriber(&mut tx, &email)
            .await?;

        let subscription = match existing {
            Some(subscriber) if subscriber.is_active => Subscription {
                subscriber,
                outcome: SubscribeOutcome::AlreadySubscribed,
            },
            Some(_) => {
                let reactivated = self
                    .newsletter_repository
                    .set_subscriber_active(&mut tx, &email, true)
                    .await?
                    .ok_or(NewsletterServiceError::NotFound)?;

                Subscription {
                    subscriber: reactivated,
                    outcome: SubscribeOutcome::Subscribed,
                }
            }
            None => {
                let created = self
                    .newsletter_repository
                    .create_subscriber(&mut tx, SubscriberUuid::new(), &email)
                    .await?;

                Subscription {
                    subscriber: created,
                    outcome: SubscribeOutcome::Subscribed,
                }
            }
        };

        tx.commit().await?;

        Ok(subscription)
    }

    async fn unsubscribe(
        &self,
        email: String,
    ) -> Result<NewsletterSubscriber, NewsletterServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let subscriber = self
            .newsletter_repository
            .set_subscriber_active(&mut tx, &email, false)
            .await?;

        let Some(subscriber) = subscriber else {
            return Err(NewsletterServiceError::NotFound);
        };

        tx.commit().await?;

        Ok(subscriber)
    }
}

#[automock]
#[async_trait]
pub trait NewsletterService: Send + Sync {
    /// Subscribe an email address, reactivating a lapsed subscription.
    async fn subscribe(&self, email: String) -> Result<Subscription, NewsletterServiceError>;

    /// Deactivate a subscription.
    async fn unsubscribe(
        &self,
        email: String,
    ) -> Result<NewsletterSubscriber, NewsletterServiceError>;
}
