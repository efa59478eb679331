//! File storage and attachment registry traits

use async_trait::async_trait;

use super::entity::{Attachment, NewAttachment, StoredFile, UploadedFile};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Persists uploaded bytes and reports where they can be fetched
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn store(&self, file: &UploadedFile) -> Result<StoredFile, DomainError>;
}

/// Registry of stored files known to the application
#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    async fn insert(&self, attachment: NewAttachment) -> Result<Attachment, DomainError>;
}
