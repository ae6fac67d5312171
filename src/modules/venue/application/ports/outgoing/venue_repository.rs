use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::{ProfileStore, ProfileStoreError};
use crate::venue::application::domain::entities::{NewVenue, Show, Venue};

/// Owner-keyed venue storage.
///
/// `insert` assigns the registration order and colour from the number of venues already in the
/// city. Implementations must retry on a collision with another venue created concurrently in the
/// same city and report [`ProfileStoreError::Contended`] once retries are exhausted.
#[async_trait]
pub trait VenueRepository: ProfileStore<Profile = Venue, New = NewVenue> {
    /// Marks the owner's venue inactive. `None` when the owner has no venue.
    async fn soft_delete_by_owner(&self, owner: UserId) -> Result<Option<Venue>, ProfileStoreError>;

    /// Appends to the owner's show list without rewriting concurrent additions.
    async fn append_show(&self, owner: UserId, show: Show) -> Result<Option<Venue>, ProfileStoreError>;
}
