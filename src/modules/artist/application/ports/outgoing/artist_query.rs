use async_trait::async_trait;
use uuid::Uuid;

use crate::artist::application::domain::entities::Artist;
use crate::profile::application::ports::outgoing::ProfileStoreError;
use crate::shared::domain::Genre;

/// Public reads. Only active profiles are ever returned.
#[async_trait]
pub trait ArtistQuery: Send + Sync {
    /// Sorted by name. `None` means every genre.
    async fn list_active(&self, genre: Option<Genre>) -> Result<Vec<Artist>, ProfileStoreError>;

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Artist>, ProfileStoreError>;
}
