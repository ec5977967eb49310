use shared::models::{Partner, PartnershipApplication};

use super::{StoreClient, StoreError};

/// List partner organizations cleared for public display
/// (status approved or active)
pub async fn list_active(store: &StoreClient) -> Result<Vec<Partner>, StoreError> {
    store
        .select("partners", &[("status", "in.(approved,active)")])
        .await
}

/// Record a new partnership application; the store assigns the
/// pending status
pub async fn apply(
    store: &StoreClient,
    application: &PartnershipApplication,
) -> Result<(), StoreError> {
    store.insert("partners", application).await
}
