use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::event::application::{
    domain::entities::{Event, UPCOMING_DEFAULT_LIMIT, UPCOMING_MAX_LIMIT},
    ports::{
        incoming::{EventError, ListEventsUseCase, MyEventsUseCase, UpcomingEventsUseCase},
        outgoing::{EventQuery, VenueLookup},
    },
};
use crate::shared::domain::City;

pub struct EventListingService<Q, V>
where
    Q: EventQuery,
    V: VenueLookup,
{
    query: Q,
    venues: V,
}

impl<Q, V> EventListingService<Q, V>
where
    Q: EventQuery,
    V: VenueLookup,
{
    pub fn new(query: Q, venues: V) -> Self {
        Self { query, venues }
    }
}

#[async_trait]
impl<Q, V> ListEventsUseCase for EventListingService<Q, V>
where
    Q: EventQuery,
    V: VenueLookup,
{
    async fn execute(&self, city: City) -> Result<Vec<Event>, EventError> {
        Ok(self.query.list_active(city).await?)
    }
}

#[async_trait]
impl<Q, V> UpcomingEventsUseCase for EventListingService<Q, V>
where
    Q: EventQuery,
    V: VenueLookup,
{
    async fn execute(&self, limit: u64) -> Result<Vec<Event>, EventError> {
        let limit = match limit {
            0 => UPCOMING_DEFAULT_LIMIT,
            n => n.min(UPCOMING_MAX_LIMIT),
        };

        Ok(self.query.upcoming(Utc::now().date_naive(), limit).await?)
    }
}

#[async_trait]
impl<Q, V> MyEventsUseCase for EventListingService<Q, V>
where
    Q: EventQuery,
    V: VenueLookup,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<Event>, EventError> {
        let venue = self
            .venues
            .find_by_owner(owner)
            .await?
            .ok_or(EventError::VenueProfileMissing)?;

        Ok(self.query.for_venue(venue.id).await?)
    }
}
