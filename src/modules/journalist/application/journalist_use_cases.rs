use std::sync::Arc;

use crate::journalist::application::ports::incoming::{
    DeleteJournalistProfileUseCase, GetJournalistUseCase, GetOwnJournalistProfileUseCase,
    ListJournalistsUseCase, SaveJournalistProfileUseCase, VerifyJournalistUseCase,
};

#[derive(Clone)]
pub struct JournalistUseCases {
    pub save: Arc<dyn SaveJournalistProfileUseCase + Send + Sync>,
    pub my_profile: Arc<dyn GetOwnJournalistProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteJournalistProfileUseCase + Send + Sync>,
    pub list: Arc<dyn ListJournalistsUseCase + Send + Sync>,
    pub get: Arc<dyn GetJournalistUseCase + Send + Sync>,
    pub verify: Arc<dyn VerifyJournalistUseCase + Send + Sync>,
}
