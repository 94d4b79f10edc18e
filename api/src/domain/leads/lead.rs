use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Lead {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub note: String,
    pub date_created: chrono::DateTime<chrono::Utc>,
    pub date_last_updated: chrono::DateTime<chrono::Utc>,
}

/// Caller-supplied attributes of a lead; create and update both take the full set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub note: String,
}
