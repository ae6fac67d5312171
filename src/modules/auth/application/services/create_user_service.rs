use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::User,
    ports::{
        incoming::use_cases::{CreateUserError, CreateUserUseCase, RegisterUserCommand},
        outgoing::{NewUser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
    },
};

#[derive(Clone)]
pub struct CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> CreateUserUseCase for CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: &RegisterUserCommand) -> Result<User, CreateUserError> {
        // 1️⃣ Duplicate checks give a friendly answer in the common case
        let by_email = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if by_email.is_some() {
            return Err(CreateUserError::EmailTaken);
        }

        let by_username = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if by_username.is_some() {
            return Err(CreateUserError::UsernameTaken);
        }

        // 2️⃣ Hash password
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        // 3️⃣ Persist; the unique indexes settle concurrent registrations
        let role = command.role();
        let new_user = NewUser {
            username: command.username().to_string(),
            email: command.email().to_string(),
            password_hash,
            role,
            genre: command.genre(),
            home_city: command.home_city(),
            is_verified: false,
            verification_requested: role.requests_verification(),
        };

        self.repository
            .create_user(new_user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailTaken => CreateUserError::EmailTaken,
                UserRepositoryError::UsernameTaken => CreateUserError::UsernameTaken,
                other => CreateUserError::RepositoryError(other.to_string()),
            })
    }
}
