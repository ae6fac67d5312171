use async_trait::async_trait;

use super::NewsStoreError;
use crate::auth::application::domain::entities::UserId;
use crate::news::application::domain::entities::News;
use crate::shared::domain::City;

/// Read side of the news feed. Only active stories, newest first.
#[async_trait]
pub trait NewsQuery: Send + Sync {
    /// `None` lists every location.
    async fn list_active(&self, location: Option<City>) -> Result<Vec<News>, NewsStoreError>;

    async fn by_author(&self, author: UserId) -> Result<Vec<News>, NewsStoreError>;
}
