pub mod lead_repository;
pub mod user_repository;
