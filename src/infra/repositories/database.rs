//! Database-backed user store.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::UserRepository;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// User store persisted through SeaORM
pub struct DatabaseUserStore {
    db: DatabaseConnection,
}

impl DatabaseUserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for DatabaseUserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Seq)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<User> {
        UserEntity::find()
            .filter(user::Column::Id.eq(id))
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(AppError::UserNotFound)
    }

    async fn save(&self, user: User) -> AppResult<()> {
        if !user.is_valid() {
            return Err(AppError::InvalidUser);
        }

        let active_model = ActiveModel {
            seq: NotSet,
            id: Set(user.id),
            name: Set(user.name),
        };

        UserEntity::insert(active_model).exec(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Database;

    async fn test_store() -> DatabaseUserStore {
        let database = Database::connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite should open");
        DatabaseUserStore::new(database.get_connection())
    }

    #[tokio::test]
    async fn test_save_and_find_all_in_order() {
        let store = test_store().await;
        store.save(User::new("b", "Bob")).await.unwrap();
        store.save(User::new("a", "Alice")).await.unwrap();

        let users = store.find_all().await.unwrap();
        assert_eq!(users, vec![User::new("b", "Bob"), User::new("a", "Alice")]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = test_store().await;
        store.save(User::new("1", "Alice")).await.unwrap();

        assert_eq!(store.find_by_id("1").await.unwrap().name, "Alice");
        assert!(matches!(
            store.find_by_id("2").await,
            Err(AppError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_user() {
        let store = test_store().await;

        assert!(matches!(
            store.save(User::new("", "Alice")).await,
            Err(AppError::InvalidUser)
        ));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_a_database_error() {
        let store = test_store().await;
        store.save(User::new("1", "Alice")).await.unwrap();

        let result = store.save(User::new("1", "Mallory")).await;
        assert!(matches!(result, Err(AppError::Database(_))));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }
}
