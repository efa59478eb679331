//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier - assigned by the user store, ascending from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse an identifier from request input; zero and garbage yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u64>().ok().filter(|id| *id > 0).map(Self)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    display_name: String,
    email: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Profile image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Materialize a stored user from a creation request
    pub fn new(id: UserId, new_user: NewUser) -> Self {
        let now = Utc::now();

        Self {
            id,
            display_name: new_user.display_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Profile image URL; empty strings count as unset
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply a partial update. Absent patch fields keep their current value.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }

        if let Some(email) = patch.email {
            self.email = email;
        }

        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }

        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Data required to create a user; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update of a user record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

impl UserPatch {
    pub fn image_url(url: impl Into<String>) -> Self {
        Self {
            image_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn profile(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            email: Some(email.into()),
            image_url: None,
        }
    }
}
