use async_trait::async_trait;

use crate::storage::application::domain::entities::{FileUpload, MediaFolder, StoredFile};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage access denied")]
    AccessDenied,

    #[error("Storage bucket not found")]
    BucketNotFound,

    #[error("Storage is misconfigured: {0}")]
    Configuration(String),

    #[error("Storage request failed: {0}")]
    Transport(String),
}

/// Object storage holding uploaded photos and audio. Only the returned reference is persisted.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload(&self, folder: MediaFolder, file: FileUpload) -> Result<StoredFile, StorageError>;

    async fn delete(&self, storage_key: &str) -> Result<(), StorageError>;
}
