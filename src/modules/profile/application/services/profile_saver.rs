use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::{ProfileChanges, ProfileStore, ProfileStoreError};
use crate::shared::validation::ValidationErrors;
use crate::storage::application::domain::entities::StoredFile;
use crate::storage::application::services::{MediaUploader, UploadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Create the profile when the owner has none, otherwise merge into it.
    Upsert,
    /// Merge into the existing profile; a missing one is an error.
    UpdateExisting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Saved<P> {
    Created(P),
    Updated(P),
}

impl<P> Saved<P> {
    pub fn is_created(&self) -> bool {
        matches!(self, Saved::Created(_))
    }

    pub fn profile(&self) -> &P {
        match self {
            Saved::Created(p) | Saved::Updated(p) => p,
        }
    }

    pub fn into_profile(self) -> P {
        match self {
            Saved::Created(p) | Saved::Updated(p) => p,
        }
    }

    pub fn map<T>(self, f: impl FnOnce(P) -> T) -> Saved<T> {
        match self {
            Saved::Created(p) => Saved::Created(f(p)),
            Saved::Updated(p) => Saved::Updated(f(p)),
        }
    }
}

/// Failures shared by the artist, venue and journalist profile services.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Validation failed")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("{0}")]
    Conflict(String),

    #[error("Profile store is busy, please retry")]
    Contended,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<ProfileStoreError> for ProfileError {
    fn from(err: ProfileStoreError) -> Self {
        match err {
            // Only reachable when the re-read after a lost insert race fails to find the winner
            ProfileStoreError::OwnerTaken => {
                ProfileError::Conflict("A profile already exists for this account".to_string())
            }
            ProfileStoreError::Conflict(msg) => ProfileError::Conflict(msg),
            ProfileStoreError::Contended => ProfileError::Contended,
            ProfileStoreError::Database(msg) => ProfileError::Database(msg),
        }
    }
}

impl From<ValidationErrors> for ProfileError {
    fn from(errors: ValidationErrors) -> Self {
        ProfileError::Invalid(errors)
    }
}

/// Creates or merges the owner's profile.
///
/// Two concurrent upserts for the same owner both see "no profile"; the unique owner index lets
/// one insert win and the other re-reads the winner and merges its changes into it.
pub async fn save_profile<S, C>(
    store: &S,
    owner: UserId,
    changes: &C,
    mode: SaveMode,
) -> Result<Saved<S::Profile>, ProfileError>
where
    S: ProfileStore + ?Sized,
    C: ProfileChanges<Profile = S::Profile, New = S::New>,
{
    upsert(store, owner, changes, mode).await.map(|(saved, _)| saved)
}

/// Shared body of the save functions; also returns the stored files the merge replaced.
async fn upsert<S, C>(
    store: &S,
    owner: UserId,
    changes: &C,
    mode: SaveMode,
) -> Result<(Saved<S::Profile>, Vec<StoredFile>), ProfileError>
where
    S: ProfileStore + ?Sized,
    C: ProfileChanges<Profile = S::Profile, New = S::New>,
{
    if let Some(existing) = store.find_by_owner(owner).await? {
        let (updated, replaced) = merge(store, existing, changes).await?;
        return Ok((Saved::Updated(updated), replaced));
    }

    if mode == SaveMode::UpdateExisting {
        return Err(ProfileError::NotFound);
    }

    let new = changes.to_new()?;

    match store.insert(owner, new).await {
        Ok(created) => Ok((Saved::Created(created), Vec::new())),
        Err(ProfileStoreError::OwnerTaken) => {
            tracing::debug!(owner = %owner, "Lost profile insert race, merging into winner");

            let winner = store
                .find_by_owner(owner)
                .await?
                .ok_or(ProfileStoreError::OwnerTaken)?;

            let (updated, replaced) = merge(store, winner, changes).await?;
            Ok((Saved::Updated(updated), replaced))
        }
        Err(e) => Err(e.into()),
    }
}

/// [`save_profile`] for change sets carrying freshly uploaded files.
///
/// On failure the fresh uploads are discarded; on success the files they replace are, taken from
/// the profile actually merged into.
pub async fn save_profile_with_files<S, C>(
    store: &S,
    uploader: &MediaUploader,
    owner: UserId,
    changes: &C,
    mode: SaveMode,
) -> Result<Saved<S::Profile>, ProfileError>
where
    S: ProfileStore + ?Sized,
    C: ProfileChanges<Profile = S::Profile, New = S::New>,
{
    let fresh = changes.new_files();
    if fresh.is_empty() {
        return save_profile(store, owner, changes, mode).await;
    }

    match upsert(store, owner, changes, mode).await {
        Ok((saved, replaced)) => {
            uploader.discard(&replaced).await;
            Ok(saved)
        }
        Err(e) => {
            uploader.discard(&fresh).await;
            Err(e)
        }
    }
}

async fn merge<S, C>(
    store: &S,
    mut profile: S::Profile,
    changes: &C,
) -> Result<(S::Profile, Vec<StoredFile>), ProfileError>
where
    S: ProfileStore + ?Sized,
    C: ProfileChanges<Profile = S::Profile, New = S::New>,
{
    let replaced = changes.replaced_files(&profile);
    changes.apply_to(&mut profile);
    let updated = store.update(profile).await?;
    Ok((updated, replaced))
}
