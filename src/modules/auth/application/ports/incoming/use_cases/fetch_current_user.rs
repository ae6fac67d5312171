use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserError {
    #[error("User not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait FetchCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserView, FetchUserError>;
}
