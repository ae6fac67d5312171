use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::{Contact, NewContact};
use crate::shared::pagination::{Page, PageRequest};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactStoreError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Contact messages, always listed newest first.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, new: NewContact) -> Result<Contact, ContactStoreError>;

    async fn list_all(&self) -> Result<Vec<Contact>, ContactStoreError>;

    /// `read` narrows the page to read or unread messages.
    async fn list_page(
        &self,
        read: Option<bool>,
        page: PageRequest,
    ) -> Result<Page<Contact>, ContactStoreError>;

    async fn count_unread(&self) -> Result<u64, ContactStoreError>;

    async fn mark_read(&self, id: Uuid) -> Result<Option<Contact>, ContactStoreError>;

    /// `false` when no message has this id.
    async fn delete(&self, id: Uuid) -> Result<bool, ContactStoreError>;
}
