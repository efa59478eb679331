//! Upload and attachment types

use bytes::Bytes;
use chrono::{DateTime, Utc};
use mime_guess::{mime, Mime};
use serde::Serialize;

/// Reported for uploads that are not raster images
pub const FILE_TYPE_NOT_ALLOWED: &str = "Sorry, you are not allowed to upload this file type.";

/// A file received in a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// A file input left empty in the browser still posts a part, with no name
    pub fn is_selected(&self) -> bool {
        !self.file_name.trim().is_empty()
    }

    /// Raster image type of the upload, guessed from `file_name`.
    ///
    /// A declared content type must be one of the types the name maps to;
    /// `application/octet-stream` counts as undeclared.
    pub fn image_type(&self, file_name: &str) -> Option<Mime> {
        let guess = mime_guess::from_path(file_name);
        let detected = guess.first()?;

        if detected.type_() != mime::IMAGE || detected.essence_str() == "image/svg+xml" {
            return None;
        }

        let declared = match self.content_type.as_deref() {
            None => return Some(detected),
            Some(raw) => raw.parse::<Mime>().ok()?,
        };

        if declared.essence_str() == mime::APPLICATION_OCTET_STREAM.essence_str()
            || guess.iter().any(|m| m.essence_str() == declared.essence_str())
        {
            Some(detected)
        } else {
            None
        }
    }
}

/// Where a stored file landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Filesystem path of the stored bytes
    pub path: String,
    /// Public URL the file is served from
    pub url: String,
    /// Final (sanitized, uniquified) file name
    pub file_name: String,
}

/// Attachment identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AttachmentId(u64);

impl AttachmentId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Attachment registration request
#[derive(Debug, Clone)]
pub struct NewAttachment {
    pub mime_type: String,
    pub name: String,
    pub path: String,
    pub url: String,
}

impl NewAttachment {
    /// Describe a stored file, detecting its MIME type from the name
    pub fn for_stored(file: &StoredFile) -> Self {
        let mime_type = mime_guess::from_path(&file.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Self {
            mime_type,
            name: file.file_name.clone(),
            path: file.path.clone(),
            url: file.url.clone(),
        }
    }
}

/// Registered media attachment
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub mime_type: String,
    pub name: String,
    pub path: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    pub fn new(id: AttachmentId, new: NewAttachment) -> Self {
        Self {
            id,
            mime_type: new.mime_type,
            name: new.name,
            path: new.path,
            url: new.url,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(name: &str) -> StoredFile {
        StoredFile {
            path: format!("/tmp/uploads/{}", name),
            url: format!("http://localhost:8080/uploads/{}", name),
            file_name: name.to_string(),
        }
    }

    #[test]
    fn test_mime_detected_from_name() {
        assert_eq!(NewAttachment::for_stored(&stored("cat.jpg")).mime_type, "image/jpeg");
        assert_eq!(NewAttachment::for_stored(&stored("cat.png")).mime_type, "image/png");
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        assert_eq!(
            NewAttachment::for_stored(&stored("blob")).mime_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_image_type_accepts_raster_images() {
        let png = UploadedFile::new("cat.png", vec![1]).with_content_type("image/png");
        assert_eq!(png.image_type("cat.png").unwrap().essence_str(), "image/png");

        let undeclared = UploadedFile::new("cat.jpg", vec![1]);
        assert_eq!(undeclared.image_type("cat.jpg").unwrap().essence_str(), "image/jpeg");

        let generic = UploadedFile::new("cat.gif", vec![1])
            .with_content_type("application/octet-stream");
        assert!(generic.image_type("cat.gif").is_some());
    }

    #[test]
    fn test_image_type_rejects_markup_and_mismatches() {
        let html = UploadedFile::new("evil.html", vec![1]).with_content_type("image/png");
        assert!(html.image_type("evil.html").is_none());

        let svg = UploadedFile::new("logo.svg", vec![1]);
        assert!(svg.image_type("logo.svg").is_none());

        let disguised = UploadedFile::new("cat.png", vec![1]).with_content_type("text/html");
        assert!(disguised.image_type("cat.png").is_none());

        assert!(UploadedFile::new("README", vec![1]).image_type("README").is_none());
    }

    #[test]
    fn test_is_selected() {
        assert!(UploadedFile::new("cat.jpg", vec![1, 2, 3]).is_selected());
        assert!(!UploadedFile::new("", Vec::<u8>::new()).is_selected());
    }
}
