use std::sync::Arc;

use crate::event::application::ports::incoming::{
    CreateEventUseCase, DeleteEventUseCase, GetEventUseCase, ListEventsUseCase, MyEventsUseCase,
    UpcomingEventsUseCase, UpdateEventUseCase,
};

#[derive(Clone)]
pub struct EventUseCases {
    pub create: Arc<dyn CreateEventUseCase + Send + Sync>,
    pub get: Arc<dyn GetEventUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEventUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEventUseCase + Send + Sync>,
    pub list: Arc<dyn ListEventsUseCase + Send + Sync>,
    pub upcoming: Arc<dyn UpcomingEventsUseCase + Send + Sync>,
    pub my_events: Arc<dyn MyEventsUseCase + Send + Sync>,
}
