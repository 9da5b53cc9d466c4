//! Upload adapter boundary.
//!
//! Turns a batch of raw multipart file payloads into durable URIs before
//! the entity is constructed. The whole batch fails if any single file
//! does, so a half-uploaded entity is never persisted.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use storefront_core::error::CoreError;

/// A raw uploaded file payload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied file name; only the extension is trusted.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Storage backend turning uploaded images into durable URIs.
///
/// Implementations return one URI per input, in input order, or fail the
/// whole batch with [`CoreError::Upload`].
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store_batch(&self, files: Vec<ImageUpload>) -> Result<Vec<String>, CoreError>;
}

/// Filesystem-backed image store.
///
/// Files are written under `root` with generated names and exposed below
/// `base_url`; the server mounts `root` at that path.
pub struct LocalImageStore {
    root: PathBuf,
    base_url: String,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    /// Generated on-disk name: UUIDv7 plus the original extension.
    ///
    /// The client's file name is never used as a path; only an
    /// alphanumeric extension survives.
    fn storage_name(file_name: &str) -> String {
        let id = uuid::Uuid::now_v7();
        match Path::new(file_name).extension().and_then(|e| e.to_str()) {
            Some(ext) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
                format!("{id}.{ext}")
            }
            _ => id.to_string(),
        }
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store_batch(&self, files: Vec<ImageUpload>) -> Result<Vec<String>, CoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CoreError::Upload(format!("creating media root: {e}")))?;

        let mut uris = Vec::with_capacity(files.len());
        for file in files {
            let name = Self::storage_name(&file.file_name);
            let path = self.root.join(&name);
            tokio::fs::write(&path, &file.bytes)
                .await
                .map_err(|e| CoreError::Upload(format!("writing '{}': {e}", file.file_name)))?;
            uris.push(format!("{}/{name}", self.base_url.trim_end_matches('/')));
        }
        Ok(uris)
    }
}
