use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::lead_repository::LeadRepository;
use crate::domain::leads::lead::{Lead, LeadFields};
use crate::infrastructure::db::PgPool;

pub struct SqlxLeadRepository {
    pub pool: PgPool,
}

impl SqlxLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn lead_from_row(r: PgRow) -> Lead {
    Lead {
        id: r.get("id"),
        owner_id: r.get("owner_id"),
        first_name: r.get("first_name"),
        last_name: r.get("last_name"),
        email: r.get("email"),
        company: r.get("company"),
        note: r.get("note"),
        date_created: r.get("date_created"),
        date_last_updated: r.get("date_last_updated"),
    }
}

#[async_trait]
impl LeadRepository for SqlxLeadRepository {
    async fn create_for_owner(&self, owner_id: Uuid, fields: &LeadFields) -> anyhow::Result<Lead> {
        let row = sqlx::query(
            r#"INSERT INTO leads (owner_id, first_name, last_name, email, company, note)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, owner_id, first_name, last_name, email, company, note,
                         date_created, date_last_updated"#,
        )
        .bind(owner_id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.company)
        .bind(&fields.note)
        .fetch_one(&self.pool)
        .await?;
        Ok(lead_from_row(row))
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Lead>> {
        let rows = sqlx::query(
            r#"SELECT id, owner_id, first_name, last_name, email, company, note,
                      date_created, date_last_updated
               FROM leads
               WHERE owner_id = $1
               ORDER BY date_created ASC, id ASC"#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(lead_from_row).collect())
    }

    async fn get_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Lead>> {
        let row = sqlx::query(
            r#"SELECT id, owner_id, first_name, last_name, email, company, note,
                      date_created, date_last_updated
               FROM leads WHERE id = $1 AND owner_id = $2"#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(lead_from_row))
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        fields: &LeadFields,
    ) -> anyhow::Result<Option<Lead>> {
        let row = sqlx::query(
            r#"UPDATE leads SET
                    first_name = $1,
                    last_name = $2,
                    email = $3,
                    company = $4,
                    note = $5,
                    date_last_updated = now()
                WHERE id = $6 AND owner_id = $7
                RETURNING id, owner_id, first_name, last_name, email, company, note,
                          date_created, date_last_updated"#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.company)
        .bind(&fields.note)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(lead_from_row))
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM leads WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
