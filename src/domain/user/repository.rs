//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserId, UserPatch};
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Create a new user, assigning the next identifier
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Apply a partial update to an existing user
    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, DomainError>;

    /// Count all users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Fetch one window of users ordered by identifier ascending
    async fn list_page(&self, offset: usize, limit: usize) -> Result<Vec<User>, DomainError>;

    /// Check if a user ID exists
    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
