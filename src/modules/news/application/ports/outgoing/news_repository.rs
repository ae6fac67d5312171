use async_trait::async_trait;
use uuid::Uuid;

use super::NewsStoreError;
use crate::news::application::domain::entities::{NewNews, News};

#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn insert(&self, new: NewNews) -> Result<News, NewsStoreError>;

    /// Any state, with its author.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<News>, NewsStoreError>;

    /// Writes the story fields and photos back; the author never changes.
    async fn update(&self, news: News) -> Result<News, NewsStoreError>;

    /// Deactivates the story and drops its photo references. `false` when no story has this id.
    async fn soft_delete(&self, id: Uuid) -> Result<bool, NewsStoreError>;
}
