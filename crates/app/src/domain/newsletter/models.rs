//! Newsletter models.

use jiff::Timestamp;

use crate::uuids::TypedUuid;

pub type SubscriberUuid = TypedUuid<NewsletterSubscriber>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubscriber {
    pub uuid: SubscriberUuid,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: Timestamp,
    pub updated_at: Timestamp,
}

/// How a subscribe request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// A new or reactivated subscription.
    Subscribed,
    /// The address was already actively subscribed.
    AlreadySubscribed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub subscriber: NewsletterSubscriber,
    pub outcome: SubscribeOutcome,
}
