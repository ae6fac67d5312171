use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    FetchCurrentUserUseCase, LoginUserUseCase, RegisterUserUseCase, ResolveCallerUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub current_user: Arc<dyn FetchCurrentUserUseCase + Send + Sync>,
    pub resolve_caller: Arc<dyn ResolveCallerUseCase + Send + Sync>,
}
