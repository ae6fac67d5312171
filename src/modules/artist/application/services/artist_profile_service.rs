use async_trait::async_trait;

use crate::artist::application::{
    domain::entities::{Artist, ArtistChanges},
    ports::{
        incoming::{
            DeleteArtistProfileUseCase, GetOwnArtistProfileUseCase, SaveArtistProfileCommand,
            SaveArtistProfileUseCase,
        },
        outgoing::ArtistRepository,
    },
};
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::services::{save_profile_with_files, ProfileError, SaveMode, Saved};
use crate::storage::application::{domain::entities::MediaFolder, services::MediaUploader};

/// Owner-facing artist profile operations.
pub struct ArtistProfileService<R>
where
    R: ArtistRepository,
{
    repo: R,
    uploader: MediaUploader,
}

impl<R> ArtistProfileService<R>
where
    R: ArtistRepository,
{
    pub fn new(repo: R, uploader: MediaUploader) -> Self {
        Self { repo, uploader }
    }
}

#[async_trait]
impl<R> SaveArtistProfileUseCase for ArtistProfileService<R>
where
    R: ArtistRepository,
{
    async fn execute(
        &self,
        command: SaveArtistProfileCommand,
        mode: SaveMode,
    ) -> Result<Saved<Artist>, ProfileError> {
        let mut changes = ArtistChanges::from_input(command.input)?;

        if !command.photos.is_empty() {
            let photos = self
                .uploader
                .upload_photos(MediaFolder::Artists, "photos", command.photos)
                .await?;
            changes.photos = Some(photos);
        }

        if let Some(track) = command.audio {
            match self
                .uploader
                .upload_audio(MediaFolder::ArtistAudio, "mp3File", track)
                .await
            {
                Ok(stored) => changes.audio_track = Some(stored),
                Err(e) => {
                    self.uploader
                        .discard(changes.photos.as_deref().unwrap_or_default())
                        .await;
                    return Err(e.into());
                }
            }
        }

        let saved =
            save_profile_with_files(&self.repo, &self.uploader, command.owner, &changes, mode).await?;

        tracing::info!(
            owner = %command.owner,
            artist_id = %saved.profile().id,
            created = saved.is_created(),
            "Artist profile saved"
        );

        Ok(saved)
    }
}

#[async_trait]
impl<R> GetOwnArtistProfileUseCase for ArtistProfileService<R>
where
    R: ArtistRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Artist, ProfileError> {
        self.repo
            .find_by_owner(owner)
            .await?
            .ok_or(ProfileError::NotFound)
    }
}

#[async_trait]
impl<R> DeleteArtistProfileUseCase for ArtistProfileService<R>
where
    R: ArtistRepository,
{
    async fn execute(&self, owner: UserId) -> Result<(), ProfileError> {
        let deleted = self
            .repo
            .delete_by_owner(owner)
            .await?
            .ok_or(ProfileError::NotFound)?;

        self.uploader.discard(&deleted.stored_files()).await;
        tracing::info!(owner = %owner, artist_id = %deleted.id, "Artist profile deleted");

        Ok(())
    }
}
