//! Upload domain: received files, stored files and attachments

mod entity;
mod storage;

pub use entity::{
    Attachment, AttachmentId, NewAttachment, StoredFile, UploadedFile, FILE_TYPE_NOT_ALLOWED,
};
pub use storage::{AttachmentRepository, FileStorage};

#[cfg(test)]
pub use storage::MockFileStorage;
