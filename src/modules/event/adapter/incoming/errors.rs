use crate::event::application::ports::incoming::EventError;
use crate::shared::api::AppError;

pub const EVENT_NOT_FOUND: &str = "Event not found";
pub const VENUE_PROFILE_NOT_FOUND: &str = "Venue profile not found";

pub fn map_event_error(err: EventError) -> AppError {
    match err {
        EventError::NotFound => AppError::not_found(EVENT_NOT_FOUND),
        EventError::VenueProfileMissing => AppError::not_found(VENUE_PROFILE_NOT_FOUND),
        EventError::NotOwner => AppError::forbidden("Not authorized to update this event"),
        EventError::Invalid(errors) => errors.into(),
        EventError::Contended => {
            AppError::conflict("The event could not be saved right now, please try again")
        }
        EventError::Database(detail) => AppError::internal(detail),
    }
}
