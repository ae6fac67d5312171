use async_trait::async_trait;

use super::EventStoreError;
use crate::auth::application::domain::entities::UserId;
use crate::event::application::domain::entities::EventVenue;

/// Resolves the venue an account runs.
#[async_trait]
pub trait VenueLookup: Send + Sync {
    /// `None` when the owner has no active venue profile.
    async fn find_by_owner(&self, owner: UserId) -> Result<Option<EventVenue>, EventStoreError>;
}
