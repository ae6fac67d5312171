pub mod event_listing_service;
pub mod event_service;

pub use event_listing_service::EventListingService;
pub use event_service::EventService;
