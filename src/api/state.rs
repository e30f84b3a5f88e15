//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::StoreBackend;
use crate::infra::{Database, DatabaseUserStore, MemoryUserStore, UserRepository};
use crate::services::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection, present only for the database-backed store
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state with manually injected services.
    pub fn new(user_service: Arc<dyn UserService>, database: Option<Arc<Database>>) -> Self {
        Self {
            user_service,
            database,
        }
    }

    /// State over a fresh in-memory user store.
    pub fn in_memory() -> Self {
        let repo: Arc<dyn UserRepository> = Arc::new(MemoryUserStore::new());
        Self::new(Arc::new(UserManager::new(repo)), None)
    }

    /// State over a database-backed user store.
    pub fn with_database(database: Arc<Database>) -> Self {
        let repo: Arc<dyn UserRepository> =
            Arc::new(DatabaseUserStore::new(database.get_connection()));
        Self::new(Arc::new(UserManager::new(repo)), Some(database))
    }

    /// Which store backs this state.
    pub fn store_backend(&self) -> StoreBackend {
        if self.database.is_some() {
            StoreBackend::Database
        } else {
            StoreBackend::Memory
        }
    }
}
