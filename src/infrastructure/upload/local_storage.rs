//! Filesystem-backed file storage

use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::domain::sanitize::sanitize_file_name;
use crate::domain::upload::{FileStorage, StoredFile, UploadedFile, FILE_TYPE_NOT_ALLOWED};
use crate::domain::DomainError;

/// Attempts at finding a free `name-N.ext` before giving up
const MAX_NAME_ATTEMPTS: usize = 1000;

/// Stores uploads under `<root>/<YYYY>/<MM>/` and serves them from
/// `<public_base_url>/<YYYY>/<MM>/`
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    public_base_url: String,
    max_bytes: usize,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
            max_bytes,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidate_name(file_name: &str, attempt: usize) -> String {
        if attempt == 0 {
            return file_name.to_string();
        }

        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!("{}-{}.{}", stem, attempt, ext),
            _ => format!("{}-{}", file_name, attempt),
        }
    }

    async fn create_unique(
        dir: &Path,
        file_name: &str,
    ) -> Result<(tokio::fs::File, String), DomainError> {
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = Self::candidate_name(file_name, attempt);

            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(dir.join(&name))
                .await
            {
                Ok(handle) => return Ok((handle, name)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(DomainError::storage(format!(
                        "Could not write file {} to {}: {}",
                        name,
                        dir.display(),
                        e
                    )));
                }
            }
        }

        Err(DomainError::storage(format!(
            "Could not find a free file name for {}",
            file_name
        )))
    }

    /// Write `bytes` into the freshly created file at `path`, removing it when
    /// the write does not complete
    async fn write_or_discard<W>(mut handle: W, path: &Path, bytes: &[u8]) -> Result<(), DomainError>
    where
        W: AsyncWrite + Unpin,
    {
        let written = match handle.write_all(bytes).await {
            Ok(()) => handle.flush().await,
            Err(e) => Err(e),
        };

        let Err(e) = written else {
            return Ok(());
        };

        drop(handle);
        if let Err(cleanup) = tokio::fs::remove_file(path).await {
            warn!(path = %path.display(), error = %cleanup, "Failed to remove partial upload");
        }

        Err(DomainError::storage(format!(
            "Could not write file {}: {}",
            path.display(),
            e
        )))
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, file: &UploadedFile) -> Result<StoredFile, DomainError> {
        if file.bytes.is_empty() {
            return Err(DomainError::storage(
                "File is empty. Please upload something more substantial.",
            ));
        }

        if file.bytes.len() > self.max_bytes {
            return Err(DomainError::storage(format!(
                "The uploaded file exceeds the maximum upload size of {} bytes.",
                self.max_bytes
            )));
        }

        let safe_name = sanitize_file_name(&file.file_name);
        let Some(mime_type) = file.image_type(&safe_name) else {
            debug!(file_name = %safe_name, content_type = ?file.content_type, "Rejected upload type");
            return Err(DomainError::storage(FILE_TYPE_NOT_ALLOWED));
        };

        let sub_dir = Utc::now().format("%Y/%m").to_string();
        let dir = self.root.join(&sub_dir);

        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            DomainError::storage(format!(
                "Unable to create directory {}. Is its parent directory writable by the server? ({})",
                dir.display(),
                e
            ))
        })?;

        let (handle, file_name) = Self::create_unique(&dir, &safe_name).await?;
        let path = dir.join(&file_name);
        Self::write_or_discard(handle, &path, &file.bytes).await?;

        let url = format!(
            "{}/{}/{}",
            self.public_base_url.trim_end_matches('/'),
            sub_dir,
            file_name
        );

        debug!(
            path = %path.display(),
            url = %url,
            mime_type = %mime_type,
            bytes = file.bytes.len(),
            "Stored upload"
        );

        Ok(StoredFile {
            path: path.to_string_lossy().into_owned(),
            url,
            file_name,
        })
    }
}
