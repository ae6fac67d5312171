use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::admin::application::{
    domain::entities::{ContentEntry, ContentKind, Dashboard, UserFilter},
    ports::outgoing::AdminStoreError,
};
use crate::auth::application::domain::entities::UserView;
use crate::shared::pagination::{PageInfo, PageRequest};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminError {
    #[error("User not found")]
    UserNotFound,

    #[error("Content not found")]
    ContentNotFound,

    #[error("Validation failed")]
    Invalid(ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<AdminStoreError> for AdminError {
    fn from(err: AdminStoreError) -> Self {
        match err {
            AdminStoreError::Database(msg) => AdminError::Database(msg),
        }
    }
}

impl From<ValidationErrors> for AdminError {
    fn from(errors: ValidationErrors) -> Self {
        AdminError::Invalid(errors)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserList {
    pub users: Vec<UserView>,
    pub pagination: PageInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentList {
    pub content: Vec<ContentEntry>,
    pub pagination: PageInfo,
}

#[async_trait]
pub trait DashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<Dashboard, AdminError>;
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, filter: UserFilter) -> Result<UserList, AdminError>;
}

#[async_trait]
pub trait VerifyUserUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<UserView, AdminError>;
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), AdminError>;
}

#[async_trait]
pub trait ListContentUseCase: Send + Sync {
    async fn execute(&self, kind: ContentKind, page: PageRequest) -> Result<ContentList, AdminError>;
}

#[async_trait]
pub trait ToggleContentUseCase: Send + Sync {
    /// Flips the current state when `active` is `None`.
    async fn execute(
        &self,
        kind: ContentKind,
        id: Uuid,
        active: Option<bool>,
    ) -> Result<ContentEntry, AdminError>;
}
