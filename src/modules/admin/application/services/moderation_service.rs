use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::{
    domain::entities::{ContentEntry, ContentKind, UserFilter},
    ports::{
        incoming::{
            AdminError, ContentList, DeleteUserUseCase, ListContentUseCase, ListUsersUseCase,
            ToggleContentUseCase, UserList, VerifyUserUseCase,
        },
        outgoing::ModerationStore,
    },
};
use crate::auth::application::domain::entities::{Role, UserView};
use crate::shared::pagination::{PageInfo, PageRequest};

pub struct ModerationService<S>
where
    S: ModerationStore,
{
    store: S,
}

impl<S> ModerationService<S>
where
    S: ModerationStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ListUsersUseCase for ModerationService<S>
where
    S: ModerationStore,
{
    async fn execute(&self, filter: UserFilter) -> Result<UserList, AdminError> {
        let page = self.store.list_users(&filter).await?;

        Ok(UserList {
            users: page.items,
            pagination: PageInfo::new(filter.page, page.total),
        })
    }
}

#[async_trait]
impl<S> VerifyUserUseCase for ModerationService<S>
where
    S: ModerationStore,
{
    async fn execute(&self, id: Uuid) -> Result<UserView, AdminError> {
        let user = self
            .store
            .verify_user(id)
            .await?
            .ok_or(AdminError::UserNotFound)?;

        tracing::info!(user_id = %id, "User verified by admin");
        Ok(user)
    }
}

#[async_trait]
impl<S> DeleteUserUseCase for ModerationService<S>
where
    S: ModerationStore,
{
    async fn execute(&self, id: Uuid) -> Result<(), AdminError> {
        let user = self
            .store
            .find_user(id)
            .await?
            .ok_or(AdminError::UserNotFound)?;

        self.store.deactivate_user(id).await?;

        let profile = match user.role {
            Role::Artist => Some(ContentKind::Artist),
            Role::Venue => Some(ContentKind::Venue),
            _ => None,
        };
        if let Some(kind) = profile {
            self.store.deactivate_profile(kind, id).await?;
        }

        tracing::info!(user_id = %id, role = %user.role, "User deactivated by admin");
        Ok(())
    }
}

#[async_trait]
impl<S> ListContentUseCase for ModerationService<S>
where
    S: ModerationStore,
{
    async fn execute(&self, kind: ContentKind, page: PageRequest) -> Result<ContentList, AdminError> {
        let result = self.store.list_content(kind, page).await?;

        Ok(ContentList {
            content: result.items,
            pagination: PageInfo::new(page, result.total),
        })
    }
}

#[async_trait]
impl<S> ToggleContentUseCase for ModerationService<S>
where
    S: ModerationStore,
{
    async fn execute(
        &self,
        kind: ContentKind,
        id: Uuid,
        active: Option<bool>,
    ) -> Result<ContentEntry, AdminError> {
        let active = match active {
            Some(active) => active,
            None => {
                let current = self
                    .store
                    .find_content(kind, id)
                    .await?
                    .ok_or(AdminError::ContentNotFound)?;
                !current.content.is_active()
            }
        };

        let entry = self
            .store
            .set_content_active(kind, id, active)
            .await?
            .ok_or(AdminError::ContentNotFound)?;

        tracing::info!(content_id = %id, kind = ?kind, active, "Content status changed by admin");
        Ok(entry)
    }
}
