use std::sync::Arc;

use crate::admin::application::ports::incoming::{
    DashboardUseCase, DeleteUserUseCase, ListContentUseCase, ListUsersUseCase,
    ToggleContentUseCase, VerifyUserUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub dashboard: Arc<dyn DashboardUseCase + Send + Sync>,
    pub list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub verify_user: Arc<dyn VerifyUserUseCase + Send + Sync>,
    pub delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub list_content: Arc<dyn ListContentUseCase + Send + Sync>,
    pub toggle_content: Arc<dyn ToggleContentUseCase + Send + Sync>,
}
