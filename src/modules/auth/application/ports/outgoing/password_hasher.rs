use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Background task failed")]
    TaskFailed,

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),
}

/// Hashing runs off the async executor; implementations must not block the caller.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` means a wrong password, `Err` means the check itself could not run.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
