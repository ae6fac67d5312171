use std::sync::Arc;

use crate::artist::application::ports::incoming::{
    DeleteArtistProfileUseCase, GetArtistUseCase, GetOwnArtistProfileUseCase, ListArtistsUseCase,
    SaveArtistProfileUseCase,
};

#[derive(Clone)]
pub struct ArtistUseCases {
    pub save: Arc<dyn SaveArtistProfileUseCase + Send + Sync>,
    pub my_profile: Arc<dyn GetOwnArtistProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteArtistProfileUseCase + Send + Sync>,
    pub list: Arc<dyn ListArtistsUseCase + Send + Sync>,
    pub get: Arc<dyn GetArtistUseCase + Send + Sync>,
}
