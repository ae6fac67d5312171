pub mod artist_query_postgres;
pub mod artist_repository_postgres;
pub mod sea_orm_entity;

pub use artist_query_postgres::ArtistQueryPostgres;
pub use artist_repository_postgres::ArtistRepositoryPostgres;
