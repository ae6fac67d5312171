use async_trait::async_trait;
use email_address::EmailAddress;

use crate::{auth::application::domain::entities::UserView, shared::validation::ValidationErrors};

// ========================= Login Request =========================
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = email.map(|e| e.trim().to_lowercase()).unwrap_or_default();
        errors.ensure(
            EmailAddress::is_valid(&email),
            "email",
            "Please provide a valid email",
        );

        let password = password.unwrap_or_default();
        errors.ensure(!password.is_empty(), "password", "Password is required");

        errors.into_result()?;
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email, wrong password and deactivated accounts all look the same to the client.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub token: String,
    pub user: UserView,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutput, LoginError>;
}
