//! User service: the only path from workflows to the user store

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    validate_email_syntax, NewUser, User, UserId, UserPatch, UserRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

const UNKNOWN_USER: &str = "Invalid user ID.";

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub display_name: String,
    pub email: String,
    pub password: String,
}

/// User service for record creation, lookup and partial updates
#[derive(Debug, Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_email_syntax(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hasher.hash(&request.password)?;

        let user = self
            .repository
            .create(NewUser {
                display_name: request.display_name,
                email: request.email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id(), name = %user.display_name(), "User created");
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// One window of users, ascending by id
    pub async fn list_page(&self, offset: usize, limit: usize) -> Result<Vec<User>, DomainError> {
        self.repository.list_page(offset, limit).await
    }

    /// Replace display name and email of an existing user
    pub async fn update_profile(
        &self,
        id: Option<UserId>,
        display_name: &str,
        email: &str,
    ) -> Result<User, DomainError> {
        let id = self.require_existing(id).await?;

        validate_email_syntax(email).map_err(|e| DomainError::validation(e.to_string()))?;

        let user = self
            .repository
            .update(id, UserPatch::profile(display_name, email))
            .await?;

        info!(user_id = %id, "User profile updated");
        Ok(user)
    }

    /// Point a user's profile image at `url`
    pub async fn set_image_url(&self, id: Option<UserId>, url: &str) -> Result<User, DomainError> {
        let id = id.ok_or_else(|| DomainError::not_found(UNKNOWN_USER))?;

        let user = self.repository.update(id, UserPatch::image_url(url)).await?;

        debug!(user_id = %id, url = %url, "User image updated");
        Ok(user)
    }

    async fn require_existing(&self, id: Option<UserId>) -> Result<UserId, DomainError> {
        let id = id.ok_or_else(|| DomainError::not_found(UNKNOWN_USER))?;

        if self.repository.exists(id).await? {
            Ok(id)
        } else {
            Err(DomainError::not_found(UNKNOWN_USER))
        }
    }
}
