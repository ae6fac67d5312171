use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::shared::domain::{City, Genre};

/// Everything needed to insert an account; the hash is computed beforehand.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub genre: Option<Genre>,
    pub home_city: Option<City>,
    pub is_verified: bool,
    pub verification_requested: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Removes the row for good. Used to undo a registration that could not finish.
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
