use uuid::Uuid;

use crate::application::ports::lead_repository::LeadRepository;
use crate::domain::leads::lead::Lead;

pub struct GetLead<'a, R: LeadRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: LeadRepository + ?Sized> GetLead<'a, R> {
    // None covers both a missing lead and one owned by another user
    pub async fn execute(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Lead>> {
        self.repo.get_owned(id, owner_id).await
    }
}
