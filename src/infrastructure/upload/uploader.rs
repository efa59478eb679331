//! Profile image uploader
//!
//! Stores the file, registers it as an attachment and points the user's
//! `image_url` at it. Every outcome is reported through the flash message
//! the caller passes in; nothing here fails the request.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::flash::FlashMessage;
use crate::domain::upload::{AttachmentRepository, FileStorage, NewAttachment, UploadedFile};
use crate::domain::user::UserId;
use crate::infrastructure::user::UserService;

pub const IMAGE_UPLOADED: &str = "image uploaded successfully";

#[derive(Clone)]
pub struct ImageUploader {
    storage: Arc<dyn FileStorage>,
    attachments: Arc<dyn AttachmentRepository>,
    users: UserService,
}

impl std::fmt::Debug for ImageUploader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUploader")
            .field("users", &self.users)
            .finish_non_exhaustive()
    }
}

impl ImageUploader {
    pub fn new(
        storage: Arc<dyn FileStorage>,
        attachments: Arc<dyn AttachmentRepository>,
        users: UserService,
    ) -> Self {
        Self {
            storage,
            attachments,
            users,
        }
    }

    /// Attach `file` to the user identified by `user_id`.
    ///
    /// An absent id is not short-circuited: the update step reports it.
    pub async fn attach(
        &self,
        user_id: Option<UserId>,
        file: Option<&UploadedFile>,
        flash: &mut FlashMessage,
    ) {
        let Some(file) = file.filter(|f| f.is_selected()) else {
            debug!("No image selected, skipping upload");
            return;
        };

        let stored = match self.storage.store(file).await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(file_name = %file.file_name, error = %e, "Image storage failed");
                flash.append_error(&e.message());
                return;
            }
        };

        match self.attachments.insert(NewAttachment::for_stored(&stored)).await {
            Ok(attachment) => {
                debug!(attachment_id = attachment.id.value(), mime = %attachment.mime_type, "Attachment registered");
            }
            Err(e) => warn!(error = %e, "Attachment registration failed"),
        }

        match self.users.set_image_url(user_id, &stored.url).await {
            Ok(user) => {
                info!(user_id = %user.id(), url = %stored.url, "Profile image attached");
                flash.append_success(IMAGE_UPLOADED);
                flash.clear_error();
            }
            Err(e) => {
                warn!(error = %e, "Profile image update failed");
                flash.clear_success();
                flash.append_error(&e.message());
            }
        }
    }
}
