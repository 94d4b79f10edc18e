use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::leads::lead::{Lead, LeadFields};

/// Every lookup is scoped to `owner_id`; a lead owned by someone else behaves as missing.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn create_for_owner(&self, owner_id: Uuid, fields: &LeadFields) -> anyhow::Result<Lead>;

    // Oldest first
    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Lead>>;

    async fn get_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Lead>>;

    // Replaces all attributes and bumps date_last_updated; None if not found/unauthorized
    async fn update_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        fields: &LeadFields,
    ) -> anyhow::Result<Option<Lead>>;

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool>;
}
