use std::sync::Arc;

use crate::venue::application::ports::incoming::{
    AddShowUseCase, DeleteVenueProfileUseCase, GetOwnVenueProfileUseCase, GetVenueUseCase,
    ListVenuesUseCase, SaveVenueProfileUseCase, VenueCalendarUseCase,
};

#[derive(Clone)]
pub struct VenueUseCases {
    pub save: Arc<dyn SaveVenueProfileUseCase + Send + Sync>,
    pub my_profile: Arc<dyn GetOwnVenueProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteVenueProfileUseCase + Send + Sync>,
    pub add_show: Arc<dyn AddShowUseCase + Send + Sync>,
    pub list: Arc<dyn ListVenuesUseCase + Send + Sync>,
    pub get: Arc<dyn GetVenueUseCase + Send + Sync>,
    pub calendar: Arc<dyn VenueCalendarUseCase + Send + Sync>,
}
