use std::sync::Arc;

use crate::auth::application::{
    domain::entities::Role,
    ports::outgoing::{NewUser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadyPresent,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Admin lookup failed: {0}")]
    Query(String),

    #[error("Admin password could not be hashed: {0}")]
    Hash(String),

    #[error("Admin account could not be stored: {0}")]
    Repository(String),
}

/// Creates the administrator account at startup. Running it again with the same seed is a no-op.
pub struct AdminSeeder<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> AdminSeeder<Q, R>
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

    pub async fn ensure_admin(&self, seed: &AdminSeed) -> Result<SeedOutcome, SeedError> {
        let email = seed.email.trim().to_lowercase();

        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| SeedError::Query(e.to_string()))?;
        if existing.is_some() {
            return Ok(SeedOutcome::AlreadyPresent);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&seed.password)
            .await
            .map_err(|e| SeedError::Hash(e.to_string()))?;

        let admin = NewUser {
            username: seed.username.trim().to_string(),
            email,
            password_hash,
            role: Role::Admin,
            genre: None,
            home_city: None,
            is_verified: true,
            verification_requested: false,
        };

        match self.repository.create_user(admin).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Admin account created");
                Ok(SeedOutcome::Created)
            }
            // Another instance seeded first
            Err(UserRepositoryError::EmailTaken | UserRepositoryError::UsernameTaken) => {
                Ok(SeedOutcome::AlreadyPresent)
            }
            Err(e) => Err(SeedError::Repository(e.to_string())),
        }
    }
}
