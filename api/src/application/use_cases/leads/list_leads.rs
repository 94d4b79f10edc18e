use uuid::Uuid;

use crate::application::ports::lead_repository::LeadRepository;
use crate::domain::leads::lead::Lead;

pub struct ListLeads<'a, R: LeadRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: LeadRepository + ?Sized> ListLeads<'a, R> {
    pub async fn execute(&self, owner_id: Uuid) -> anyhow::Result<Vec<Lead>> {
        self.repo.list_for_owner(owner_id).await
    }
}
