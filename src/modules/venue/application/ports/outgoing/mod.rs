pub mod venue_query;
pub mod venue_repository;

pub use venue_query::VenueQuery;
pub use venue_repository::VenueRepository;
