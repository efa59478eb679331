//! Upload storage, attachment registry and the profile image uploader

mod attachments;
mod local_storage;
mod uploader;

pub use attachments::InMemoryAttachmentRepository;
pub use local_storage::LocalFileStorage;
pub use uploader::{ImageUploader, IMAGE_UPLOADED};
