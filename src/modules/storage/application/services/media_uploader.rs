use futures::future::join_all;
use std::sync::Arc;

use crate::shared::validation::ValidationErrors;
use crate::storage::application::{
    domain::{
        entities::{FileUpload, MediaFolder, StoredFile},
        upload_policy::UploadPolicy,
    },
    ports::outgoing::{ObjectStorage, StorageError},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadError {
    #[error("Upload rejected")]
    Rejected(ValidationErrors),

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
}

/// Checks uploads against the policy and hands them to object storage.
#[derive(Clone)]
pub struct MediaUploader {
    storage: Arc<dyn ObjectStorage>,
    policy: UploadPolicy,
}

impl MediaUploader {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self::with_policy(storage, UploadPolicy::new())
    }

    pub fn with_policy(storage: Arc<dyn ObjectStorage>, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }

    /// Uploads every photo or none: when one upload fails the ones already stored are removed.
    pub async fn upload_photos(
        &self,
        folder: MediaFolder,
        field: &str,
        files: Vec<FileUpload>,
    ) -> Result<Vec<StoredFile>, UploadError> {
        self.policy
            .check_photos(field, &files)
            .map_err(UploadError::Rejected)?;

        let results = join_all(
            files
                .into_iter()
                .map(|file| self.storage.upload(folder, file)),
        )
        .await;

        let mut stored = Vec::with_capacity(results.len());
        let mut failure = None;
        for result in results {
            match result {
                Ok(file) => stored.push(file),
                Err(e) => failure = failure.or(Some(e)),
            }
        }

        match failure {
            Some(e) => {
                self.discard(&stored).await;
                Err(UploadError::Storage(e))
            }
            None => Ok(stored),
        }
    }

    /// Stores an audio track, keeping the client's file name on the reference.
    pub async fn upload_audio(
        &self,
        folder: MediaFolder,
        field: &str,
        file: FileUpload,
    ) -> Result<StoredFile, UploadError> {
        self.policy
            .check_audio(field, &file)
            .map_err(UploadError::Rejected)?;

        let original_name = file.file_name.clone();
        let mut stored = self.storage.upload(folder, file).await?;
        stored.original_name = Some(original_name);
        Ok(stored)
    }

    /// Best-effort removal. Failures are logged and never reported.
    pub async fn discard(&self, files: &[StoredFile]) {
        if files.is_empty() {
            return;
        }

        let outcomes = join_all(files.iter().map(|f| async move {
            (f, self.storage.delete(&f.storage_key).await)
        }))
        .await;

        for (file, outcome) in outcomes {
            if let Err(e) = outcome {
                tracing::warn!(storage_key = %file.storage_key, error = %e, "Failed to delete stored file");
            }
        }
    }
}

impl std::fmt::Debug for MediaUploader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaUploader")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
