use async_trait::async_trait;
use uuid::Uuid;

use crate::journalist::application::domain::entities::Journalist;
use crate::profile::application::ports::outgoing::ProfileStoreError;

#[async_trait]
pub trait JournalistQuery: Send + Sync {
    /// Active profiles sorted by full name.
    async fn list_active(&self) -> Result<Vec<Journalist>, ProfileStoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Journalist>, ProfileStoreError>;
}
