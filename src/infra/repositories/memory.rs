//! In-memory user store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// User store backed by a vector behind a single reader/writer lock.
///
/// Reads share the lock, `save` holds it exclusively.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<User> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(AppError::UserNotFound)
    }

    async fn save(&self, user: User) -> AppResult<()> {
        if !user.is_valid() {
            return Err(AppError::InvalidUser);
        }

        self.users.write().await.push(user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let store = MemoryUserStore::new();
        store.save(User::new("b", "Bob")).await.unwrap();
        store.save(User::new("a", "Alice")).await.unwrap();

        let users = store.find_all().await.unwrap();
        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_find_by_id_miss_leaves_store_untouched() {
        let store = MemoryUserStore::new();
        store.save(User::new("1", "Alice")).await.unwrap();

        let result = store.find_by_id("2").await;
        assert!(matches!(result, Err(AppError::UserNotFound)));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_hit() {
        let store = MemoryUserStore::new();
        store.save(User::new("1", "Alice")).await.unwrap();

        let user = store.find_by_id("1").await.unwrap();
        assert_eq!(user, User::new("1", "Alice"));
    }

    #[tokio::test]
    async fn test_save_rejects_empty_fields() {
        let store = MemoryUserStore::new();

        assert!(matches!(
            store.save(User::new("", "Alice")).await,
            Err(AppError::InvalidUser)
        ));
        assert!(matches!(
            store.save(User::new("1", "")).await,
            Err(AppError::InvalidUser)
        ));
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
