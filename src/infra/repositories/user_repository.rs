//! User repository - persistence gateway for user records.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserDraft, UserId};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every method is a single point query or write against the users table.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user in store order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by primary key
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Check whether any user holds this email
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Check whether a user other than `id` holds this email
    async fn exists_by_email_excluding_id(&self, email: &str, id: UserId) -> AppResult<bool>;

    /// Insert a draft without an id, update one that has it
    async fn save(&self, draft: UserDraft) -> AppResult<User>;

    /// Remove a stored user
    async fn delete(&self, user: &User) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.is_some())
    }

    async fn exists_by_email_excluding_id(&self, email: &str, id: UserId) -> AppResult<bool> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::Id.ne(id))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.is_some())
    }

    async fn save(&self, draft: UserDraft) -> AppResult<User> {
        let model = match draft.id {
            None => {
                let active_model = ActiveModel {
                    id: NotSet,
                    full_name: Set(draft.full_name),
                    email: Set(draft.email),
                    phone: Set(draft.phone),
                };

                active_model
                    .insert(self.db.as_ref())
                    .await
                    .map_err(AppError::from_write)?
            }
            Some(id) => {
                let active_model = ActiveModel {
                    id: Unchanged(id),
                    full_name: Set(draft.full_name),
                    email: Set(draft.email),
                    phone: Set(draft.phone),
                };

                // Row vanished between lookup and write
                active_model.update(self.db.as_ref()).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => AppError::NotFound(id),
                    other => AppError::from_write(other),
                })?
            }
        };

        Ok(User::from(model))
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let result = UserEntity::delete_by_id(user.id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(user.id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i64, email: &str) -> user::Model {
        user::Model {
            id,
            full_name: "Ana Pérez".to_string(),
            email: email.to_string(),
            phone: "555-0100".to_string(),
        }
    }

    fn draft(id: Option<i64>, email: &str) -> UserDraft {
        UserDraft {
            id,
            full_name: "Ana Pérez".to_string(),
            email: email.to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_all_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "a@x.com"), model(2, "b@x.com")]])
            .into_connection();
        let store = UserStore::new(db);

        let users = store.find_all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[1].email, "b@x.com");
    }

    #[tokio::test]
    async fn test_find_by_id_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let store = UserStore::new(db);

        assert!(store.find_by_id(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists_by_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "ana@x.com")]])
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let store = UserStore::new(db);

        assert!(store.exists_by_email("ana@x.com").await.unwrap());
        assert!(!store.exists_by_email_excluding_id("ana@x.com", 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_save_without_id_inserts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "ana@x.com")]])
            .into_connection();
        let store = UserStore::new(db);

        let user = store.save(draft(None, "ana@x.com")).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.full_name, "Ana Pérez");
    }

    #[tokio::test]
    async fn test_save_with_id_updates() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "new@x.com")]])
            .into_connection();
        let store = UserStore::new(db);

        let user = store.save(draft(Some(3), "new@x.com")).await.unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.email, "new@x.com");
    }

    #[tokio::test]
    async fn test_save_update_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let store = UserStore::new(db);

        let result = store.save(draft(Some(8), "x@x.com")).await;
        assert!(matches!(result, Err(AppError::NotFound(8))));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let store = UserStore::new(db);
        let user = User::from(model(1, "ana@x.com"));

        assert!(store.delete(&user).await.is_ok());
        assert!(matches!(store.delete(&user).await, Err(AppError::NotFound(1))));
    }
}
