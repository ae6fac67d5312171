use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveCallerError {
    /// The token names an account that no longer exists or has been deactivated.
    #[error("Account not found or inactive")]
    UnknownAccount,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Turns a verified token subject into the current account state.
#[async_trait]
pub trait ResolveCallerUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Caller, ResolveCallerError>;
}
