use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::EventStoreError;
use crate::event::application::domain::entities::Event;
use crate::shared::domain::City;

#[async_trait]
pub trait EventQuery: Send + Sync {
    /// Active events of a city by date, then time.
    async fn list_active(&self, city: City) -> Result<Vec<Event>, EventStoreError>;

    /// Active events on or after `from`, soonest first.
    async fn upcoming(&self, from: NaiveDate, limit: u64) -> Result<Vec<Event>, EventStoreError>;

    /// Every event of the venue, latest date first.
    async fn for_venue(&self, venue_id: Uuid) -> Result<Vec<Event>, EventStoreError>;
}
