#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsStoreError {
    #[error("Database error: {0}")]
    Database(String),
}
