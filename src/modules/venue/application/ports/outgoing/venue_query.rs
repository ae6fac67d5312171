use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::ports::outgoing::ProfileStoreError;
use crate::shared::domain::City;
use crate::venue::application::domain::entities::{CalendarEntry, Venue};

#[async_trait]
pub trait VenueQuery: Send + Sync {
    /// Active venues of `city`, sorted by name.
    async fn list_active(&self, city: City) -> Result<Vec<Venue>, ProfileStoreError>;

    /// Direct lookup, inactive venues included.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Venue>, ProfileStoreError>;

    /// Active venues of `city` with their shows, sorted by registration order.
    async fn calendar(&self, city: City) -> Result<Vec<CalendarEntry>, ProfileStoreError>;
}
