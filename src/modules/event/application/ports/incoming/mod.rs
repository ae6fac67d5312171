pub mod use_cases;

pub use use_cases::{
    CreateEventUseCase, DeleteEventUseCase, EventError, GetEventUseCase, ListEventsUseCase,
    MyEventsUseCase, UpcomingEventsUseCase, UpdateEventUseCase,
};
