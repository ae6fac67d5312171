use async_trait::async_trait;
use uuid::Uuid;

use super::AdminStoreError;
use crate::admin::application::domain::entities::{ContentEntry, ContentKind, UserFilter};
use crate::auth::application::domain::entities::{User, UserView};
use crate::shared::pagination::{Page, PageRequest};

#[async_trait]
pub trait ModerationStore: Send + Sync {
    /// Newest first.
    async fn list_users(&self, filter: &UserFilter) -> Result<Page<UserView>, AdminStoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, AdminStoreError>;

    /// Marks the account verified and clears its pending request.
    async fn verify_user(&self, id: Uuid) -> Result<Option<UserView>, AdminStoreError>;

    async fn deactivate_user(&self, id: Uuid) -> Result<(), AdminStoreError>;

    /// Deactivates the artist or venue profile owned by `owner`, if there is one.
    async fn deactivate_profile(&self, kind: ContentKind, owner: Uuid) -> Result<(), AdminStoreError>;

    /// Active rows of one kind, newest first.
    async fn list_content(
        &self,
        kind: ContentKind,
        page: PageRequest,
    ) -> Result<Page<ContentEntry>, AdminStoreError>;

    async fn find_content(
        &self,
        kind: ContentKind,
        id: Uuid,
    ) -> Result<Option<ContentEntry>, AdminStoreError>;

    /// `None` when no row of that kind has this id.
    async fn set_content_active(
        &self,
        kind: ContentKind,
        id: Uuid,
        active: bool,
    ) -> Result<Option<ContentEntry>, AdminStoreError>;
}
