pub mod venue_directory_service;
pub mod venue_profile_service;

pub use venue_directory_service::VenueDirectoryService;
pub use venue_profile_service::VenueProfileService;
