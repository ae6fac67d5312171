use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::journalist::application::{
    domain::entities::{Journalist, JournalistChanges},
    ports::{
        incoming::{
            DeleteJournalistProfileUseCase, GetOwnJournalistProfileUseCase,
            SaveJournalistProfileCommand, SaveJournalistProfileUseCase,
        },
        outgoing::JournalistRepository,
    },
};
use crate::profile::application::services::{save_profile_with_files, ProfileError, SaveMode, Saved};
use crate::storage::application::{domain::entities::MediaFolder, services::MediaUploader};

pub struct JournalistProfileService<R>
where
    R: JournalistRepository,
{
    repo: R,
    uploader: MediaUploader,
}

impl<R> JournalistProfileService<R>
where
    R: JournalistRepository,
{
    pub fn new(repo: R, uploader: MediaUploader) -> Self {
        Self { repo, uploader }
    }
}

#[async_trait]
impl<R> SaveJournalistProfileUseCase for JournalistProfileService<R>
where
    R: JournalistRepository,
{
    async fn execute(
        &self,
        command: SaveJournalistProfileCommand,
        mode: SaveMode,
    ) -> Result<Saved<Journalist>, ProfileError> {
        let mut changes = JournalistChanges::from_input(command.input)?;

        if let Some(photo) = command.profile_photo {
            let stored = self
                .uploader
                .upload_photos(MediaFolder::Journalists, "profilePhoto", vec![photo])
                .await?;
            changes.profile_photo = stored.into_iter().next();
        }

        let saved =
            save_profile_with_files(&self.repo, &self.uploader, command.owner, &changes, mode).await?;

        tracing::info!(
            owner = %command.owner,
            journalist_id = %saved.profile().id,
            created = saved.is_created(),
            "Journalist profile saved"
        );

        Ok(saved)
    }
}

#[async_trait]
impl<R> GetOwnJournalistProfileUseCase for JournalistProfileService<R>
where
    R: JournalistRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Journalist, ProfileError> {
        self.repo
            .find_by_owner(owner)
            .await?
            .ok_or(ProfileError::NotFound)
    }
}

#[async_trait]
impl<R> DeleteJournalistProfileUseCase for JournalistProfileService<R>
where
    R: JournalistRepository,
{
    async fn execute(&self, owner: UserId) -> Result<(), ProfileError> {
        let deleted = self
            .repo
            .delete_by_owner(owner)
            .await?
            .ok_or(ProfileError::NotFound)?;

        if let Some(photo) = &deleted.profile_photo {
            self.uploader.discard(std::slice::from_ref(photo)).await;
        }
        tracing::info!(owner = %owner, journalist_id = %deleted.id, "Journalist profile deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journalist::application::domain::entities::{
        fixtures::journalist, CoverageInput, JournalistProfileInput, NewJournalist,
    };
    use crate::profile::application::ports::outgoing::{ProfileStore, ProfileStoreError};
    use crate::shared::domain::CoverageArea;
    use crate::storage::application::domain::entities::FileUpload;
    use crate::storage::application::services::media_uploader::test_support::{
        uploader, RecordingStorage,
    };
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Default)]
    struct MockJournalistRepository {
        existing: Mutex<Option<Journalist>>,
    }

    impl MockJournalistRepository {
        fn with(journalist: Journalist) -> Self {
            Self {
                existing: Mutex::new(Some(journalist)),
            }
        }
    }

    #[async_trait]
    impl ProfileStore for MockJournalistRepository {
        type Profile = Journalist;
        type New = NewJournalist;

        async fn find_by_owner(&self, _owner: UserId) -> Result<Option<Journalist>, ProfileStoreError> {
            Ok(self.existing.lock().unwrap().clone())
        }

        async fn insert(&self, owner: UserId, new: NewJournalist) -> Result<Journalist, ProfileStoreError> {
            let now = Utc::now();
            let created = Journalist {
                id: Uuid::new_v4(),
                user_id: owner,
                full_name: new.full_name,
                bio: new.bio,
                profile_photo: new.profile_photo,
                areas_of_coverage: new.areas_of_coverage,
                is_verified: false,
                verified_at: None,
                is_active: true,
                created_at: now,
                updated_at: now,
            };
            *self.existing.lock().unwrap() = Some(created.clone());
            Ok(created)
        }

        async fn update(&self, journalist: Journalist) -> Result<Journalist, ProfileStoreError> {
            *self.existing.lock().unwrap() = Some(journalist.clone());
            Ok(journalist)
        }
    }

    #[async_trait]
    impl JournalistRepository for MockJournalistRepository {
        async fn delete_by_owner(&self, _owner: UserId) -> Result<Option<Journalist>, ProfileStoreError> {
            Ok(self.existing.lock().unwrap().take())
        }

        async fn verify(&self, _id: Uuid) -> Result<Option<Journalist>, ProfileStoreError> {
            unimplemented!("not used by the profile service")
        }
    }

    fn command(owner: UserId, photo: Option<FileUpload>) -> SaveJournalistProfileCommand {
        SaveJournalistProfileCommand {
            owner,
            input: JournalistProfileInput {
                full_name: Some("Keith Spera".into()),
                bio: None,
                areas_of_coverage: Some(CoverageInput::Encoded(r#"["mobile"]"#.into())),
            },
            profile_photo: photo,
        }
    }

    #[tokio::test]
    async fn upsert_creates_profile_with_photo() {
        // Arrange
        let storage = Arc::new(RecordingStorage::default());
        let service =
            JournalistProfileService::new(MockJournalistRepository::default(), uploader(storage.clone()));
        let owner = UserId::from(Uuid::new_v4());

        // Act
        let saved = SaveJournalistProfileUseCase::execute(
            &service,
            command(owner, Some(FileUpload::new("me.png", "image/png", vec![1]))),
            SaveMode::Upsert,
        )
        .await
        .unwrap();

        // Assert
        assert!(saved.is_created());
        let journalist = saved.into_profile();
        assert_eq!(journalist.areas_of_coverage, vec![CoverageArea::Mobile]);
        assert_eq!(
            journalist.profile_photo.unwrap().storage_key,
            "gulf-music/journalists/me.png"
        );
    }

    #[tokio::test]
    async fn new_photo_discards_previous_one() {
        let owner = UserId::from(Uuid::new_v4());
        let storage = Arc::new(RecordingStorage::default());
        let service = JournalistProfileService::new(
            MockJournalistRepository::with(journalist(owner)),
            uploader(storage.clone()),
        );

        let saved = SaveJournalistProfileUseCase::execute(
            &service,
            command(owner, Some(FileUpload::new("new.jpg", "image/jpeg", vec![1]))),
            SaveMode::UpdateExisting,
        )
        .await
        .unwrap();

        assert!(!saved.is_created());
        assert_eq!(
            *storage.deleted.lock().unwrap(),
            vec!["gulf-music/journalists/old.jpg".to_string()]
        );
    }

    #[tokio::test]
    async fn non_image_photo_is_rejected() {
        let storage = Arc::new(RecordingStorage::default());
        let service =
            JournalistProfileService::new(MockJournalistRepository::default(), uploader(storage.clone()));

        let result = SaveJournalistProfileUseCase::execute(
            &service,
            command(
                UserId::from(Uuid::new_v4()),
                Some(FileUpload::new("cv.pdf", "application/pdf", vec![1])),
            ),
            SaveMode::Upsert,
        )
        .await;

        assert!(matches!(result, Err(ProfileError::Upload(_))));
        assert!(storage.uploaded.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_without_profile_is_not_found() {
        let service = JournalistProfileService::new(
            MockJournalistRepository::default(),
            uploader(Arc::new(RecordingStorage::default())),
        );

        let result = SaveJournalistProfileUseCase::execute(
            &service,
            command(UserId::from(Uuid::new_v4()), None),
            SaveMode::UpdateExisting,
        )
        .await;

        assert!(matches!(result, Err(ProfileError::NotFound)));
    }

    #[tokio::test]
    async fn delete_is_hard_and_removes_photo() {
        let owner = UserId::from(Uuid::new_v4());
        let storage = Arc::new(RecordingStorage::default());
        let service = JournalistProfileService::new(
            MockJournalistRepository::with(journalist(owner)),
            uploader(storage.clone()),
        );

        DeleteJournalistProfileUseCase::execute(&service, owner).await.unwrap();

        assert_eq!(storage.deleted.lock().unwrap().len(), 1);
        let own = GetOwnJournalistProfileUseCase::execute(&service, owner).await;
        assert!(matches!(own, Err(ProfileError::NotFound)));
    }
}
