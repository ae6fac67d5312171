use async_trait::async_trait;
use uuid::Uuid;

use crate::artist::application::domain::entities::{Artist, ArtistProfileInput};
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::services::{ProfileError, SaveMode, Saved};
use crate::shared::domain::Genre;
use crate::storage::application::domain::entities::FileUpload;

#[derive(Debug, Clone)]
pub struct SaveArtistProfileCommand {
    pub owner: UserId,
    pub input: ArtistProfileInput,
    pub photos: Vec<FileUpload>,
    pub audio: Option<FileUpload>,
}

#[async_trait]
pub trait SaveArtistProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SaveArtistProfileCommand,
        mode: SaveMode,
    ) -> Result<Saved<Artist>, ProfileError>;
}

#[async_trait]
pub trait GetOwnArtistProfileUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Artist, ProfileError>;
}

#[async_trait]
pub trait DeleteArtistProfileUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<(), ProfileError>;
}

#[async_trait]
pub trait ListArtistsUseCase: Send + Sync {
    async fn execute(&self, genre: Option<Genre>) -> Result<Vec<Artist>, ProfileError>;
}

#[async_trait]
pub trait GetArtistUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Artist, ProfileError>;
}
