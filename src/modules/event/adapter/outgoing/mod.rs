pub mod event_query_postgres;
pub mod event_repository_postgres;
pub mod sea_orm_entity;
pub mod venue_lookup_postgres;

pub use event_query_postgres::EventQueryPostgres;
pub use event_repository_postgres::EventRepositoryPostgres;
pub use venue_lookup_postgres::VenueLookupPostgres;
