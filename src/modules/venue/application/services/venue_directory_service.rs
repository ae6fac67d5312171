use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::services::ProfileError;
use crate::shared::domain::City;
use crate::venue::application::{
    domain::entities::{CalendarEntry, Venue},
    ports::{
        incoming::{GetVenueUseCase, ListVenuesUseCase, VenueCalendarUseCase},
        outgoing::VenueQuery,
    },
};

pub struct VenueDirectoryService<Q>
where
    Q: VenueQuery,
{
    query: Q,
}

impl<Q> VenueDirectoryService<Q>
where
    Q: VenueQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListVenuesUseCase for VenueDirectoryService<Q>
where
    Q: VenueQuery,
{
    async fn execute(&self, city: City) -> Result<Vec<Venue>, ProfileError> {
        Ok(self.query.list_active(city).await?)
    }
}

#[async_trait]
impl<Q> GetVenueUseCase for VenueDirectoryService<Q>
where
    Q: VenueQuery,
{
    async fn execute(&self, id: Uuid) -> Result<Venue, ProfileError> {
        self.query.find_by_id(id).await?.ok_or(ProfileError::NotFound)
    }
}

#[async_trait]
impl<Q> VenueCalendarUseCase for VenueDirectoryService<Q>
where
    Q: VenueQuery,
{
    async fn execute(&self, city: City) -> Result<Vec<CalendarEntry>, ProfileError> {
        Ok(self.query.calendar(city).await?)
    }
}
