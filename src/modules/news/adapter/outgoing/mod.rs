pub mod news_query_postgres;
pub mod news_repository_postgres;
pub mod sea_orm_entity;

pub use news_query_postgres::NewsQueryPostgres;
pub use news_repository_postgres::NewsRepositoryPostgres;
