use uuid::Uuid;

use crate::application::ports::lead_repository::LeadRepository;

pub struct DeleteLead<'a, R: LeadRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: LeadRepository + ?Sized> DeleteLead<'a, R> {
    pub async fn execute(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        let deleted = self.repo.delete_owned(id, owner_id).await?;
        if deleted {
            tracing::debug!(lead_id = %id, owner_id = %owner_id, "lead_deleted");
        }
        Ok(deleted)
    }
}
