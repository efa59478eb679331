//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserPatch, UserRepository};
use crate::domain::DomainError;

const DUPLICATE_NAME: &str = "Sorry, that username already exists!";
const DUPLICATE_EMAIL: &str = "Sorry, that email address is already used!";
const UNKNOWN_USER: &str = "Invalid user ID.";

/// In-memory implementation of UserRepository, ordered by id
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    next_id: AtomicU64,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a repository with initial users, numbered from 1
    pub fn with_users(users: Vec<NewUser>) -> Self {
        let mut map = BTreeMap::new();

        for (index, new_user) in users.into_iter().enumerate() {
            let user = User::new(UserId::new(index as u64 + 1), new_user);
            map.insert(user.id(), user);
        }

        let next_id = map.len() as u64 + 1;

        Self {
            users: Arc::new(RwLock::new(map)),
            next_id: AtomicU64::new(next_id),
        }
    }

    fn find_conflict(
        users: &BTreeMap<UserId, User>,
        display_name: Option<&str>,
        email: Option<&str>,
        exclude: Option<UserId>,
    ) -> Option<&'static str> {
        let others = || users.values().filter(move |u| Some(u.id()) != exclude);

        if let Some(name) = display_name {
            if others().any(|u| u.display_name() == name) {
                return Some(DUPLICATE_NAME);
            }
        }

        if let Some(email) = email {
            if others().any(|u| u.email().eq_ignore_ascii_case(email)) {
                return Some(DUPLICATE_EMAIL);
            }
        }

        None
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if let Some(message) = Self::find_conflict(
            &users,
            Some(new_user.display_name.as_str()),
            Some(new_user.email.as_str()),
            None,
        ) {
            return Err(DomainError::conflict(message));
        }

        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let user = User::new(id, new_user);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&id) {
            return Err(DomainError::not_found(UNKNOWN_USER));
        }

        if let Some(message) = Self::find_conflict(
            &users,
            patch.display_name.as_deref(),
            patch.email.as_deref(),
            Some(id),
        ) {
            return Err(DomainError::conflict(message));
        }

        let user = users
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(UNKNOWN_USER))?;
        user.apply(patch);

        Ok(user.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.read().await.len())
    }

    async fn list_page(&self, offset: usize, limit: usize) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().skip(offset).take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            display_name: name.to_string(),
            email: format!("{}@example.com", name),
            password_hash: "hashed_password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();

        let user = repo.create(new_user("alice")).await.unwrap();
        assert_eq!(user.id().value(), 1);

        let retrieved = repo.get(user.id()).await.unwrap();
        assert_eq!(retrieved.unwrap().display_name(), "alice");
    }

    #[tokio::test]
    async fn test_duplicate_name() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("alice")).await.unwrap();

        let mut other = new_user("alice");
        other.email = "other@example.com".to_string();

        let result = repo.create(other).await;
        assert!(matches!(
            result,
            Err(DomainError::Conflict { message }) if message == DUPLICATE_NAME
        ));
    }

    #[tokio::test]
    async fn test_duplicate_email_ignores_case() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("alice")).await.unwrap();

        let mut other = new_user("bobby");
        other.email = "ALICE@example.com".to_string();

        let result = repo.create(other).await;
        assert!(matches!(
            result,
            Err(DomainError::Conflict { message }) if message == DUPLICATE_EMAIL
        ));
    }

    #[tokio::test]
    async fn test_failed_create_does_not_consume_id() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("alice")).await.unwrap();
        let _ = repo.create(new_user("alice")).await;

        let bobby = repo.create(new_user("bobby")).await.unwrap();
        assert_eq!(bobby.id().value(), 2);
    }

    #[tokio::test]
    async fn test_update() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("alice")).await.unwrap();

        let updated = repo
            .update(user.id(), UserPatch::profile("alicia", "alicia@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.display_name(), "alicia");
        assert_eq!(updated.email(), "alicia@example.com");
    }

    #[tokio::test]
    async fn test_update_to_own_values_is_not_a_conflict() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("alice")).await.unwrap();

        let result = repo
            .update(user.id(), UserPatch::profile("alice", "alice@example.com"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_conflicts_with_other_user() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("alice")).await.unwrap();
        let bobby = repo.create(new_user("bobby")).await.unwrap();

        let result = repo
            .update(bobby.id(), UserPatch::profile("alice", "bobby@example.com"))
            .await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let repo = InMemoryUserRepository::new();

        let result = repo.update(UserId::new(3), UserPatch::image_url("x")).await;
        assert!(matches!(
            result,
            Err(DomainError::NotFound { message }) if message == UNKNOWN_USER
        ));
    }

    #[tokio::test]
    async fn test_list_page_orders_by_id() {
        let names = ["user1", "user2", "user3", "user4", "user5"];
        let repo = InMemoryUserRepository::with_users(names.iter().map(|n| new_user(n)).collect());

        assert_eq!(repo.count().await.unwrap(), 5);

        let first: Vec<u64> = repo
            .list_page(0, 2)
            .await
            .unwrap()
            .iter()
            .map(|u| u.id().value())
            .collect();
        assert_eq!(first, vec![1, 2]);

        let last: Vec<u64> = repo
            .list_page(4, 2)
            .await
            .unwrap()
            .iter()
            .map(|u| u.id().value())
            .collect();
        assert_eq!(last, vec![5]);

        assert!(repo.list_page(10, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_with_users_continues_numbering() {
        let repo = InMemoryUserRepository::with_users(vec![new_user("alice")]);

        let bobby = repo.create(new_user("bobby")).await.unwrap();
        assert_eq!(bobby.id().value(), 2);
    }
}
