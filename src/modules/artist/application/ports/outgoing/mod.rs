pub mod artist_query;
pub mod artist_repository;

pub use artist_query::ArtistQuery;
pub use artist_repository::ArtistRepository;
