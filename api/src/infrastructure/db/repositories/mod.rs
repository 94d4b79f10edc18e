pub mod lead_repository_sqlx;
pub mod user_repository_sqlx;
