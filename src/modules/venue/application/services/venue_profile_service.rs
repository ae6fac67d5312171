use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::services::{save_profile_with_files, ProfileError, SaveMode, Saved};
use crate::storage::application::{domain::entities::MediaFolder, services::MediaUploader};
use crate::venue::application::{
    domain::entities::{Show, ShowInput, Venue, VenueChanges},
    ports::{
        incoming::{
            AddShowUseCase, DeleteVenueProfileUseCase, GetOwnVenueProfileUseCase,
            SaveVenueProfileCommand, SaveVenueProfileUseCase,
        },
        outgoing::VenueRepository,
    },
};

pub struct VenueProfileService<R>
where
    R: VenueRepository,
{
    repo: R,
    uploader: MediaUploader,
}

impl<R> VenueProfileService<R>
where
    R: VenueRepository,
{
    pub fn new(repo: R, uploader: MediaUploader) -> Self {
        Self { repo, uploader }
    }
}

#[async_trait]
impl<R> SaveVenueProfileUseCase for VenueProfileService<R>
where
    R: VenueRepository,
{
    async fn execute(
        &self,
        command: SaveVenueProfileCommand,
        mode: SaveMode,
    ) -> Result<Saved<Venue>, ProfileError> {
        let mut changes = VenueChanges::from_input(command.input)?;

        if !command.photos.is_empty() {
            let photos = self
                .uploader
                .upload_photos(MediaFolder::Venues, "photos", command.photos)
                .await?;
            changes.photos = Some(photos);
        }

        let saved =
            save_profile_with_files(&self.repo, &self.uploader, command.owner, &changes, mode).await?;

        let venue = saved.profile();
        tracing::info!(
            owner = %command.owner,
            venue_id = %venue.id,
            city = %venue.city,
            registration_order = venue.registration_order,
            created = saved.is_created(),
            "Venue profile saved"
        );

        Ok(saved)
    }
}

#[async_trait]
impl<R> GetOwnVenueProfileUseCase for VenueProfileService<R>
where
    R: VenueRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Venue, ProfileError> {
        self.repo
            .find_by_owner(owner)
            .await?
            .ok_or(ProfileError::NotFound)
    }
}

#[async_trait]
impl<R> DeleteVenueProfileUseCase for VenueProfileService<R>
where
    R: VenueRepository,
{
    /// Soft delete: the row, its photos and its events stay for moderation.
    async fn execute(&self, owner: UserId) -> Result<(), ProfileError> {
        let venue = self
            .repo
            .soft_delete_by_owner(owner)
            .await?
            .ok_or(ProfileError::NotFound)?;

        tracing::info!(owner = %owner, venue_id = %venue.id, "Venue profile deactivated");
        Ok(())
    }
}

#[async_trait]
impl<R> AddShowUseCase for VenueProfileService<R>
where
    R: VenueRepository,
{
    async fn execute(&self, owner: UserId, input: ShowInput) -> Result<Venue, ProfileError> {
        let show = Show::from_input(input)?;

        self.repo
            .append_show(owner, show)
            .await?
            .ok_or(ProfileError::NotFound)
    }
}
