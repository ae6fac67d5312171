use std::sync::Arc;

use crate::news::application::ports::incoming::{
    CreateNewsUseCase, DeleteNewsUseCase, GetNewsUseCase, ListNewsUseCase, MyNewsUseCase,
    UpdateNewsUseCase,
};

#[derive(Clone)]
pub struct NewsUseCases {
    pub create: Arc<dyn CreateNewsUseCase + Send + Sync>,
    pub get: Arc<dyn GetNewsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateNewsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteNewsUseCase + Send + Sync>,
    pub list: Arc<dyn ListNewsUseCase + Send + Sync>,
    pub my_news: Arc<dyn MyNewsUseCase + Send + Sync>,
}
