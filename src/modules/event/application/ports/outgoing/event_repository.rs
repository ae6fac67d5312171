use async_trait::async_trait;
use uuid::Uuid;

use super::EventStoreError;
use crate::event::application::domain::entities::{Event, NewEvent};

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Stores the event with the next sequence of its venue and the colour that sequence maps to.
    async fn insert(&self, new: NewEvent) -> Result<Event, EventStoreError>;

    /// Any state, joined with its venue.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, EventStoreError>;

    /// Writes the editable fields back; city, colour and sequence are left as stored.
    async fn update(&self, event: Event) -> Result<Event, EventStoreError>;

    /// `false` when no event has this id.
    async fn soft_delete(&self, id: Uuid) -> Result<bool, EventStoreError>;
}
