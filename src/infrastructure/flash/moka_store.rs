use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;

use crate::domain::flash::{FlashMessage, FlashStore, FlashToken};

/// Flash store backed by a moka cache; unread messages expire after the TTL
#[derive(Debug, Clone)]
pub struct MokaFlashStore {
    cache: Cache<FlashToken, FlashMessage>,
}

impl MokaFlashStore {
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(capacity)
            .build();

        Self { cache }
    }
}

#[async_trait]
impl FlashStore for MokaFlashStore {
    async fn put(&self, message: FlashMessage) -> FlashToken {
        let token = FlashToken::generate();
        self.cache.insert(token.clone(), message).await;
        token
    }

    async fn take(&self, token: &FlashToken) -> Option<FlashMessage> {
        self.cache.remove(token).await
    }
}
