//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{UserDocument, Validate};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new user
    async fn create_user(&self, user: UserDocument) -> AppResult<()>;

    /// List every stored user
    async fn list_users(&self) -> AppResult<Vec<UserDocument>>;

    /// Check the backing store
    async fn health(&self) -> AppResult<()>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, user: UserDocument) -> AppResult<()> {
        user.validate()?;
        self.users.insert(user).await
    }

    async fn list_users(&self) -> AppResult<Vec<UserDocument>> {
        self.users.find_all().await
    }

    async fn health(&self) -> AppResult<()> {
        self.users.ping().await
    }
}
