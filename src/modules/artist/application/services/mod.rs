pub mod artist_directory_service;
pub mod artist_profile_service;

pub use artist_directory_service::ArtistDirectoryService;
pub use artist_profile_service::ArtistProfileService;
