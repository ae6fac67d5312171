#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminStoreError {
    #[error("Database error: {0}")]
    Database(String),
}
