use uuid::Uuid;

use crate::application::ports::lead_repository::LeadRepository;
use crate::domain::leads::lead::{Lead, LeadFields};

pub struct CreateLead<'a, R: LeadRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: LeadRepository + ?Sized> CreateLead<'a, R> {
    pub async fn execute(&self, owner_id: Uuid, fields: &LeadFields) -> anyhow::Result<Lead> {
        self.repo.create_for_owner(owner_id, fields).await
    }
}
