pub mod create_lead;
pub mod delete_lead;
pub mod get_lead;
pub mod list_leads;
pub mod update_lead;
