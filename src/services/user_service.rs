//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in creation order
    async fn get_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// Create a user with a freshly generated ID
    async fn create_user(&self, name: String) -> AppResult<User>;
}

/// Concrete implementation of UserService over any user repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        tracing::debug!(user_id = %id, "Looking up user");
        self.repo.find_by_id(id).await
    }

    async fn create_user(&self, name: String) -> AppResult<User> {
        if name.is_empty() {
            tracing::warn!("Rejected user with empty name");
            return Err(AppError::InvalidUser);
        }

        let user = User::new(Uuid::new_v4().to_string(), name);
        self.repo.save(user.clone()).await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_create_user_empty_name_never_saves() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(String::new()).await;

        assert!(matches!(result, Err(AppError::InvalidUser)));
    }

    #[tokio::test]
    async fn test_create_user_saves_generated_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .withf(|user| user.name == "Alice" && Uuid::parse_str(&user.id).is_ok())
            .times(1)
            .returning(|_| Ok(()));

        let service = UserManager::new(Arc::new(repo));
        let user = service.create_user("Alice".to_string()).await.unwrap();

        assert_eq!(user.name, "Alice");
        assert!(!user.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_propagates_save_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .returning(|_| Err(AppError::internal("disk full")));

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user("Alice".to_string()).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_get_user_not_found_passes_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq("missing"))
            .returning(|_| Err(AppError::UserNotFound));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user("missing").await;

        assert!(matches!(result, Err(AppError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_get_users_delegates_to_find_all() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![User::new("1", "Alice"), User::new("2", "Bob")]));

        let service = UserManager::new(Arc::new(repo));
        let users = service.get_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "Bob");
    }
}
