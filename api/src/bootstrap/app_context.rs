use std::sync::Arc;

use crate::application::ports::lead_repository::LeadRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    lead_repo: Arc<dyn LeadRepository>,
}

impl AppServices {
    pub fn new(user_repo: Arc<dyn UserRepository>, lead_repo: Arc<dyn LeadRepository>) -> Self {
        Self {
            user_repo,
            lead_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn lead_repo(&self) -> Arc<dyn LeadRepository> {
        self.services.lead_repo.clone()
    }
}
