//! Domain layer - entities, value types and the traits implemented by
//! infrastructure

pub mod error;
pub mod flash;
pub mod pagination;
pub mod sanitize;
pub mod upload;
pub mod user;

pub use error::DomainError;
pub use flash::{Alert, FlashMessage, FlashStore, FlashToken};
pub use pagination::PageCursor;
pub use upload::{
    Attachment, AttachmentId, AttachmentRepository, FileStorage, NewAttachment, StoredFile,
    UploadedFile,
};
pub use user::{NewUser, User, UserId, UserPatch, UserRepository, ValidationPolicy};
