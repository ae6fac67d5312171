pub mod event_query;
pub mod event_repository;
pub mod event_store_error;
pub mod venue_lookup;

pub use event_query::EventQuery;
pub use event_repository::EventRepository;
pub use event_store_error::EventStoreError;
pub use venue_lookup::VenueLookup;
