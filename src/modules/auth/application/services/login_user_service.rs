use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::UserView,
    ports::{
        incoming::use_cases::{LoginError, LoginOutput, LoginRequest, LoginUserUseCase},
        outgoing::{PasswordHasher, TokenProvider, UserQuery},
    },
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutput, LoginError> {
        // 1️⃣ Find user by email (already normalized)
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // 2️⃣ Deactivated accounts cannot sign in
        if !user.is_active {
            tracing::info!(user_id = %user.id, "Login attempt on deactivated account");
            return Err(LoginError::InvalidCredentials);
        }

        // 3️⃣ Verify password
        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // 4️⃣ Issue token
        let token = self
            .token_provider
            .generate_access_token(user.id.value())
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginOutput {
            token,
            user: UserView::from(&user),
        })
    }
}
