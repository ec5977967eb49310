use shared::models::NewsletterSubscription;

use super::{StoreClient, StoreError};

/// Record a newsletter subscription
pub async fn subscribe(
    store: &StoreClient,
    subscription: &NewsletterSubscription,
) -> Result<(), StoreError> {
    store.insert("newsletter_subscribers", subscription).await
}
