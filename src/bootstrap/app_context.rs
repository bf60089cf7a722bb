use std::sync::Arc;

use crate::application::ports::item_repository::ItemRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    item_repo: Arc<dyn ItemRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AppServices {
    pub fn new(item_repo: Arc<dyn ItemRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            item_repo,
            user_repo,
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

    pub fn item_repo(&self) -> Arc<dyn ItemRepository> {
        self.services.item_repo.clone()
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }
}
