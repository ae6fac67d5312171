use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Caller, UserId};
use crate::event::application::{
    domain::entities::{Event, EventInput},
    ports::outgoing::EventStoreError,
};
use crate::shared::domain::City;
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventError {
    #[error("Event not found")]
    NotFound,

    /// The caller has no venue profile to host events.
    #[error("Venue profile not found")]
    VenueProfileMissing,

    /// The caller neither hosts the event nor is an admin.
    #[error("Not the event's venue")]
    NotOwner,

    #[error("Validation failed")]
    Invalid(ValidationErrors),

    #[error("Event store is busy, please retry")]
    Contended,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<EventStoreError> for EventError {
    fn from(err: EventStoreError) -> Self {
        match err {
            EventStoreError::Contended => EventError::Contended,
            EventStoreError::Database(msg) => EventError::Database(msg),
        }
    }
}

impl From<ValidationErrors> for EventError {
    fn from(errors: ValidationErrors) -> Self {
        EventError::Invalid(errors)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateEventUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, input: EventInput) -> Result<Event, EventError>;
}

#[async_trait]
pub trait GetEventUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Event, EventError>;
}

#[async_trait]
pub trait UpdateEventUseCase: Send + Sync {
    async fn execute(&self, caller: Caller, id: Uuid, input: EventInput) -> Result<Event, EventError>;
}

#[async_trait]
pub trait DeleteEventUseCase: Send + Sync {
    async fn execute(&self, caller: Caller, id: Uuid) -> Result<(), EventError>;
}

#[async_trait]
pub trait ListEventsUseCase: Send + Sync {
    async fn execute(&self, city: City) -> Result<Vec<Event>, EventError>;
}

#[async_trait]
pub trait UpcomingEventsUseCase: Send + Sync {
    async fn execute(&self, limit: u64) -> Result<Vec<Event>, EventError>;
}

#[async_trait]
pub trait MyEventsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<Event>, EventError>;
}
