use async_trait::async_trait;

use crate::artist::application::domain::entities::{Artist, NewArtist};
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::{ProfileStore, ProfileStoreError};

#[async_trait]
pub trait ArtistRepository: ProfileStore<Profile = Artist, New = NewArtist> {
    /// Removes the owner's profile row and returns it, `None` when there was none.
    async fn delete_by_owner(&self, owner: UserId) -> Result<Option<Artist>, ProfileStoreError>;
}
