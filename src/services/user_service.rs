//! User service - Handles user-related business logic.
//!
//! Owns the one business rule: no two users may share an email. The
//! pre-check gives a clean error in the common case; the unique constraint
//! behind `UserRepository::save` settles concurrent writers.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserDraft, UserFields, UserId};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID; absence is not an error
    async fn get_user(&self, id: UserId) -> AppResult<Option<User>>;

    /// Create a user with a freshly generated id
    async fn create_user(&self, fields: UserFields) -> AppResult<User>;

    /// Replace name, email and phone of an existing user
    async fn update_user(&self, id: UserId, fields: UserFields) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn get_user(&self, id: UserId) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn create_user(&self, fields: UserFields) -> AppResult<User> {
        if self.repo.exists_by_email(&fields.email).await? {
            tracing::warn!(email = %fields.email, "Rejected create: email already in use");
            return Err(AppError::DuplicateEmail);
        }

        let user = self.repo.save(UserDraft::new(fields)).await?;
        tracing::info!(id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, fields: UserFields) -> AppResult<User> {
        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))?;

        if self.repo.exists_by_email_excluding_id(&fields.email, id).await? {
            tracing::warn!(id, email = %fields.email, "Rejected update: email held by another user");
            return Err(AppError::DuplicateEmail);
        }

        user.apply(fields);
        let user = self.repo.save(user.into()).await?;
        tracing::info!(id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))?;

        self.repo.delete(&user).await?;
        tracing::info!(id, "User deleted");
        Ok(())
    }
}
