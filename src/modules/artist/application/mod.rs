pub mod artist_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use artist_use_cases::ArtistUseCases;
