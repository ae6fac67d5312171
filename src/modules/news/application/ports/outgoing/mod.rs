pub mod news_query;
pub mod news_repository;
pub mod news_store_error;

pub use news_query::NewsQuery;
pub use news_repository::NewsRepository;
pub use news_store_error::NewsStoreError;
