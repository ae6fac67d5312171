pub mod journalist_query;
pub mod journalist_repository;

pub use journalist_query::JournalistQuery;
pub use journalist_repository::JournalistRepository;
