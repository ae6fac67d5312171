use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::journalist::application::domain::entities::{Journalist, JournalistProfileInput};
use crate::profile::application::services::{ProfileError, SaveMode, Saved};
use crate::storage::application::domain::entities::FileUpload;

#[derive(Debug, Clone)]
pub struct SaveJournalistProfileCommand {
    pub owner: UserId,
    pub input: JournalistProfileInput,
    pub profile_photo: Option<FileUpload>,
}

#[async_trait]
pub trait SaveJournalistProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SaveJournalistProfileCommand,
        mode: SaveMode,
    ) -> Result<Saved<Journalist>, ProfileError>;
}

#[async_trait]
pub trait GetOwnJournalistProfileUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Journalist, ProfileError>;
}

#[async_trait]
pub trait DeleteJournalistProfileUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<(), ProfileError>;
}

#[async_trait]
pub trait ListJournalistsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Journalist>, ProfileError>;
}

#[async_trait]
pub trait GetJournalistUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Journalist, ProfileError>;
}

#[async_trait]
pub trait VerifyJournalistUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Journalist, ProfileError>;
}
