use shared::models::MemberRegistration;

use super::{StoreClient, StoreError};

/// Record a new member registration; the store assigns id, status and
/// join timestamp
pub async fn register(
    store: &StoreClient,
    registration: &MemberRegistration,
) -> Result<(), StoreError> {
    store.insert("members", registration).await
}
