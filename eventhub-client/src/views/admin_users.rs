/// User management coordinator
///
/// Admin-only page listing every profile and changing roles. The backend
/// enforces the admin requirement; a denial is returned to the caller as a
/// blocking message and is never retried here.

use uuid::Uuid;

use eventhub_core::error::StoreResult;
use eventhub_core::models::{Profile, Role};

use crate::store::EventStore;

/// User management page state
#[derive(Debug, Clone)]
pub struct AdminUsersView {
    /// All profiles visible to the caller
    pub profiles: Vec<Profile>,
}

impl AdminUsersView {
    /// Loads every profile
    ///
    /// Fails with `PermissionDenied` when the caller is not an admin; the
    /// view surfaces that instead of the table.
    pub async fn load(store: &dyn EventStore) -> StoreResult<Self> {
        let profiles = store.list_profiles().await?;
        Ok(AdminUsersView { profiles })
    }

    /// Changes a user's role, then refetches the table
    ///
    /// The refetch keeps the list authoritative instead of patching local
    /// state from the input.
    pub async fn change_role(
        &mut self,
        store: &dyn EventStore,
        user_id: Uuid,
        role: Role,
    ) -> StoreResult<()> {
        store.update_profile_role(user_id, role).await?;
        self.profiles = store.list_profiles().await?;
        Ok(())
    }
}
