#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventStoreError {
    /// Repeated collisions on the per-venue sequence; the request may be retried.
    #[error("Event store is contended")]
    Contended,

    #[error("Database error: {0}")]
    Database(String),
}
