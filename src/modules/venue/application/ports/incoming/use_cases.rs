use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::services::{ProfileError, SaveMode, Saved};
use crate::shared::domain::City;
use crate::storage::application::domain::entities::FileUpload;
use crate::venue::application::domain::entities::{CalendarEntry, ShowInput, Venue, VenueProfileInput};

#[derive(Debug, Clone)]
pub struct SaveVenueProfileCommand {
    pub owner: UserId,
    pub input: VenueProfileInput,
    pub photos: Vec<FileUpload>,
}

#[async_trait]
pub trait SaveVenueProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SaveVenueProfileCommand,
        mode: SaveMode,
    ) -> Result<Saved<Venue>, ProfileError>;
}

#[async_trait]
pub trait GetOwnVenueProfileUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Venue, ProfileError>;
}

#[async_trait]
pub trait DeleteVenueProfileUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<(), ProfileError>;
}

#[async_trait]
pub trait AddShowUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, input: ShowInput) -> Result<Venue, ProfileError>;
}

#[async_trait]
pub trait ListVenuesUseCase: Send + Sync {
    async fn execute(&self, city: City) -> Result<Vec<Venue>, ProfileError>;
}

#[async_trait]
pub trait GetVenueUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Venue, ProfileError>;
}

#[async_trait]
pub trait VenueCalendarUseCase: Send + Sync {
    async fn execute(&self, city: City) -> Result<Vec<CalendarEntry>, ProfileError>;
}
