use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::validation::ValidationErrors;
use crate::storage::application::domain::entities::StoredFile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileStoreError {
    /// The owner already has a profile (unique owner index).
    #[error("Owner already has a profile")]
    OwnerTaken,

    /// Any other unique index the row collides with.
    #[error("{0}")]
    Conflict(String),

    /// Repeated collisions on an assigned value; the caller may retry the request.
    #[error("Profile store is contended")]
    Contended,

    #[error("Database error: {0}")]
    Database(String),
}

/// Storage of one kind of profile, keyed by its owning user (at most one per user).
#[async_trait]
pub trait ProfileStore: Send + Sync {
    type Profile: Send + Sync;
    type New: Send;

    async fn find_by_owner(&self, owner: UserId) -> Result<Option<Self::Profile>, ProfileStoreError>;

    async fn insert(&self, owner: UserId, new: Self::New) -> Result<Self::Profile, ProfileStoreError>;

    async fn update(&self, profile: Self::Profile) -> Result<Self::Profile, ProfileStoreError>;
}

/// A validated set of profile field changes. Absent fields leave the stored value untouched.
pub trait ProfileChanges: Send + Sync {
    type Profile;
    type New;

    /// Builds a new profile, failing when a field required on creation is missing.
    fn to_new(&self) -> Result<Self::New, ValidationErrors>;

    fn apply_to(&self, profile: &mut Self::Profile);

    /// Files uploaded for this change set.
    fn new_files(&self) -> Vec<StoredFile> {
        Vec::new()
    }

    /// Files of `current` that applying these changes would orphan.
    fn replaced_files(&self, _current: &Self::Profile) -> Vec<StoredFile> {
        Vec::new()
    }
}
