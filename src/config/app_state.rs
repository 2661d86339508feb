use std::sync::Arc;

use crate::config::AppConfig;
use crate::repositories::UserRepository;
use crate::services::UserService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// User service, owning the repository it was built with
    pub user_service: UserService,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new AppState around the given repository
    pub fn new(repository: Arc<dyn UserRepository>, config: AppConfig) -> Self {
        Self {
            user_service: UserService::new(repository),
            config: Arc::new(config),
        }
    }
}
