pub mod sea_orm_entity;
pub mod venue_query_postgres;
pub mod venue_repository_postgres;

pub use venue_query_postgres::VenueQueryPostgres;
pub use venue_repository_postgres::VenueRepositoryPostgres;
