use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Caller, UserId};
use crate::news::application::{
    domain::entities::{LocationFilter, News, NewsInput},
    ports::outgoing::NewsStoreError,
};
use crate::shared::validation::ValidationErrors;
use crate::storage::application::{domain::entities::FileUpload, services::UploadError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum NewsError {
    #[error("News not found")]
    NotFound,

    /// The caller neither wrote the story nor is an admin.
    #[error("Not the story's author")]
    NotAuthor,

    #[error("Validation failed")]
    Invalid(ValidationErrors),

    #[error("Upload failed: {0}")]
    Upload(UploadError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<NewsStoreError> for NewsError {
    fn from(err: NewsStoreError) -> Self {
        match err {
            NewsStoreError::Database(msg) => NewsError::Database(msg),
        }
    }
}

impl From<ValidationErrors> for NewsError {
    fn from(errors: ValidationErrors) -> Self {
        NewsError::Invalid(errors)
    }
}

impl From<UploadError> for NewsError {
    fn from(err: UploadError) -> Self {
        NewsError::Upload(err)
    }
}

#[derive(Debug, Clone)]
pub struct CreateNewsCommand {
    pub author: UserId,
    pub input: NewsInput,
    pub photos: Vec<FileUpload>,
}

/// Replaces the story fields. Photos are replaced only when new ones are sent.
#[derive(Debug, Clone)]
pub struct UpdateNewsCommand {
    pub caller: Caller,
    pub id: Uuid,
    pub input: NewsInput,
    pub photos: Vec<FileUpload>,
}

#[async_trait]
pub trait CreateNewsUseCase: Send + Sync {
    async fn execute(&self, command: CreateNewsCommand) -> Result<News, NewsError>;
}

#[async_trait]
pub trait UpdateNewsUseCase: Send + Sync {
    async fn execute(&self, command: UpdateNewsCommand) -> Result<News, NewsError>;
}

#[async_trait]
pub trait DeleteNewsUseCase: Send + Sync {
    async fn execute(&self, caller: Caller, id: Uuid) -> Result<(), NewsError>;
}

#[async_trait]
pub trait GetNewsUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<News, NewsError>;
}

#[async_trait]
pub trait ListNewsUseCase: Send + Sync {
    async fn execute(&self, filter: LocationFilter) -> Result<Vec<News>, NewsError>;
}

#[async_trait]
pub trait MyNewsUseCase: Send + Sync {
    async fn execute(&self, author: UserId) -> Result<Vec<News>, NewsError>;
}
