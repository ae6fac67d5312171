pub mod domain;
pub mod ports;
pub mod services;
pub mod venue_use_cases;

pub use venue_use_cases::VenueUseCases;
