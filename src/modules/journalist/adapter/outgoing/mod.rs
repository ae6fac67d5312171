pub mod journalist_query_postgres;
pub mod journalist_repository_postgres;
pub mod sea_orm_entity;

pub use journalist_query_postgres::JournalistQueryPostgres;
pub use journalist_repository_postgres::JournalistRepositoryPostgres;
