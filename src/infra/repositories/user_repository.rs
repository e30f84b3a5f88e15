//! User repository abstraction.

use async_trait::async_trait;

use crate::domain::User;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations exclusively own their backing collection and keep ids unique.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users in insertion order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by id, `UserNotFound` if absent
    async fn find_by_id(&self, id: &str) -> AppResult<User>;

    /// Append a user; `InvalidUser` if id or name is empty
    async fn save(&self, user: User) -> AppResult<()>;
}
