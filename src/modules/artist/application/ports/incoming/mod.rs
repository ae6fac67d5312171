pub mod use_cases;

pub use use_cases::{
    DeleteArtistProfileUseCase, GetArtistUseCase, GetOwnArtistProfileUseCase, ListArtistsUseCase,
    SaveArtistProfileCommand, SaveArtistProfileUseCase,
};
