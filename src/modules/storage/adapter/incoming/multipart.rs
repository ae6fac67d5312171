use actix_multipart::form::tempfile::TempFile;

use crate::shared::api::AppError;
use crate::storage::application::{
    domain::entities::FileUpload, ports::outgoing::StorageError, services::UploadError,
};

/// Buffers a spooled multipart file so it can be checked and handed to object storage.
pub async fn read_upload(file: TempFile) -> Result<FileUpload, AppError> {
    let file_name = file.file_name.clone().unwrap_or_else(|| "file".to_string());
    let content_type = file
        .content_type
        .as_ref()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let bytes = tokio::fs::read(file.file.path())
        .await
        .map_err(|e| AppError::internal(format!("Failed to read uploaded file: {e}")))?;

    Ok(FileUpload::new(file_name, content_type, bytes))
}

pub async fn read_uploads(files: Vec<TempFile>) -> Result<Vec<FileUpload>, AppError> {
    let mut uploads = Vec::with_capacity(files.len());
    for file in files {
        uploads.push(read_upload(file).await?);
    }
    Ok(uploads)
}

pub fn map_upload_error(err: UploadError) -> AppError {
    match err {
        UploadError::Rejected(errors) => errors.into(),
        UploadError::Storage(StorageError::Configuration(detail)) => {
            AppError::internal(format!("Storage is misconfigured: {detail}"))
        }
        UploadError::Storage(e) => AppError::upstream("File upload failed", e),
    }
}
