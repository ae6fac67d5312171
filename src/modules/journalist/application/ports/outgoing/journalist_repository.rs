use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::journalist::application::domain::entities::{Journalist, NewJournalist};
use crate::profile::application::ports::outgoing::{ProfileStore, ProfileStoreError};

#[async_trait]
pub trait JournalistRepository: ProfileStore<Profile = Journalist, New = NewJournalist> {
    /// Removes the owner's profile row and returns it, `None` when there was none.
    async fn delete_by_owner(&self, owner: UserId) -> Result<Option<Journalist>, ProfileStoreError>;

    /// Marks the profile and its owning user verified in one transaction.
    async fn verify(&self, id: Uuid) -> Result<Option<Journalist>, ProfileStoreError>;
}
