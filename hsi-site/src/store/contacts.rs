use shared::models::ContactMessage;

use super::{StoreClient, StoreError};

/// Record a contact-form message
pub async fn submit(store: &StoreClient, message: &ContactMessage) -> Result<(), StoreError> {
    store.insert("contacts", message).await
}
