//! One-shot flash store trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::message::FlashMessage;

/// Key handed to the browser in the redirect target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlashToken(String);

impl FlashToken {
    /// Generate a fresh random token
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }
}

impl From<String> for FlashToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for FlashToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transient storage for flash messages crossing a single redirect.
///
/// `take` removes the entry: a message is read at most once.
#[async_trait]
pub trait FlashStore: Send + Sync + Debug {
    /// Store a message and return the token that retrieves it
    async fn put(&self, message: FlashMessage) -> FlashToken;

    /// Remove and return the message behind `token`
    async fn take(&self, token: &FlashToken) -> Option<FlashMessage>;
}
