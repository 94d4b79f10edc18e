use uuid::Uuid;

use crate::application::ports::lead_repository::LeadRepository;
use crate::domain::leads::lead::{Lead, LeadFields};

pub struct UpdateLead<'a, R: LeadRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: LeadRepository + ?Sized> UpdateLead<'a, R> {
    pub async fn execute(
        &self,
        id: Uuid,
        owner_id: Uuid,
        fields: &LeadFields,
    ) -> anyhow::Result<Option<Lead>> {
        self.repo.update_owned(id, owner_id, fields).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::leads::create_lead::CreateLead;
    use crate::test_support::{InMemoryLeadRepository, lead_fields};

    #[tokio::test]
    async fn replaces_fields_and_bumps_last_updated() {
        let repo = InMemoryLeadRepository::default();
        let owner = Uuid::new_v4();
        let lead = CreateLead { repo: &repo }
            .execute(owner, &lead_fields("Ada"))
            .await
            .unwrap();

        let mut changed = lead_fields("Ada");
        changed.company = "Analytical Engines".into();
        changed.note = "call back".into();
        let updated = UpdateLead { repo: &repo }
            .execute(lead.id, owner, &changed)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.company, "Analytical Engines");
        assert_eq!(updated.note, "call back");
        assert_eq!(updated.date_created, lead.date_created);
        assert!(updated.date_last_updated >= lead.date_last_updated);
    }

    #[tokio::test]
    async fn other_users_cannot_update() {
        let repo = InMemoryLeadRepository::default();
        let owner = Uuid::new_v4();
        let lead = CreateLead { repo: &repo }
            .execute(owner, &lead_fields("Ada"))
            .await
            .unwrap();

        let res = UpdateLead { repo: &repo }
            .execute(lead.id, Uuid::new_v4(), &lead_fields("Mallory"))
            .await
            .unwrap();
        assert!(res.is_none());
        let kept = repo.get_owned(lead.id, owner).await.unwrap().unwrap();
        assert_eq!(kept.first_name, "Ada");
    }
}
