//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Wire the default repository and service over a database handle.
    pub fn from_database(database: Database) -> Self {
        let repository = Arc::new(UserStore::new(database));
        Self::new(Arc::new(UserManager::new(repository)))
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
