//! Account service.

use photogram_common::{AppError, AppResult};
use photogram_db::{entities::user, repositories::UserRepository};
use serde::Deserialize;
use validator::Validate;

/// A username as submitted by a client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UsernameInput {
    #[validate(length(min = 3, max = 16))]
    pub username: String,
}

impl UsernameInput {
    /// Wrap a raw username.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Account service for business logic.
#[derive(Clone)]
pub struct AccountService {
    user_repo: UserRepository,
}

impl AccountService {
    /// Create a new account service.
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// Log in as `username`, registering it on first use.
    pub async fn login(&self, input: UsernameInput) -> AppResult<user::Model> {
        input.validate()?;

        if let Some(user) = self.user_repo.find_by_username(&input.username).await? {
            return Ok(user);
        }

        match self.user_repo.create(&input.username).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, username = %user.username, "Registered user");
                Ok(user)
            }
            // Lost a race with a concurrent login for the same name.
            Err(AppError::DuplicateUsername(_)) => {
                self.user_repo.get_by_username(&input.username).await
            }
            Err(e) => Err(e),
        }
    }

    /// Change a user's username.
    pub async fn rename(&self, user_id: i32, input: UsernameInput) -> AppResult<user::Model> {
        input.validate()?;

        self.user_repo
            .update_username(user_id, &input.username)
            .await?;
        self.user_repo.get_by_id(user_id).await
    }

    /// Get a user by ID.
    pub async fn get(&self, user_id: i32) -> AppResult<user::Model> {
        self.user_repo.get_by_id(user_id).await
    }

    /// Get a user by username.
    pub async fn get_by_username(&self, username: &str) -> AppResult<user::Model> {
        self.user_repo.get_by_username(username).await
    }
}
