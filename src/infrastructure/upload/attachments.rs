//! In-memory attachment registry

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::upload::{Attachment, AttachmentId, AttachmentRepository, NewAttachment};
use crate::domain::DomainError;

#[derive(Debug)]
pub struct InMemoryAttachmentRepository {
    attachments: Arc<RwLock<HashMap<AttachmentId, Attachment>>>,
    next_id: AtomicU64,
}

impl InMemoryAttachmentRepository {
    pub fn new() -> Self {
        Self {
            attachments: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryAttachmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttachmentRepository for InMemoryAttachmentRepository {
    async fn insert(&self, attachment: NewAttachment) -> Result<Attachment, DomainError> {
        let id = AttachmentId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let attachment = Attachment::new(id, attachment);

        self.attachments.write().await.insert(id, attachment.clone());
        Ok(attachment)
    }
}
