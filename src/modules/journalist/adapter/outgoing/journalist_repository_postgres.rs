use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, ConnectionTrait,
    DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::journalists::{ActiveModel, Column, Entity, Model};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::journalist::application::{
    domain::entities::{Journalist, NewJournalist},
    ports::outgoing::JournalistRepository,
};
use crate::profile::adapter::outgoing::{map_db_err, to_json};
use crate::profile::application::ports::outgoing::{ProfileStore, ProfileStoreError};
use crate::shared::db::is_unique_violation;

const OWNER_UNIQUE_INDEX: &str = "idx_journalists_user_id_unique";

#[derive(Clone, Debug)]
pub struct JournalistRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JournalistRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for JournalistRepositoryPostgres {
    type Profile = Journalist;
    type New = NewJournalist;

    async fn find_by_owner(&self, owner: UserId) -> Result<Option<Journalist>, ProfileStoreError> {
        find_model(&*self.db, owner)
            .await?
            .map(to_journalist)
            .transpose()
    }

    async fn insert(&self, owner: UserId, new: NewJournalist) -> Result<Journalist, ProfileStoreError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner.value()),
            full_name: Set(new.full_name),
            bio: Set(new.bio),
            profile_photo: Set(new.profile_photo.as_ref().map(to_json).transpose()?),
            areas_of_coverage: Set(to_json(&new.areas_of_coverage)?),
            is_verified: Set(false),
            verified_at: Set(None),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e, Some(OWNER_UNIQUE_INDEX)) {
                ProfileStoreError::OwnerTaken
            } else {
                map_db_err(e)
            }
        })?;

        to_journalist(created)
    }

    /// Verification state is owned by [`JournalistRepository::verify`] and left untouched here.
    async fn update(&self, journalist: Journalist) -> Result<Journalist, ProfileStoreError> {
        let model = ActiveModel {
            id: Unchanged(journalist.id),
            user_id: Unchanged(journalist.user_id.value()),
            full_name: Set(journalist.full_name),
            bio: Set(journalist.bio),
            profile_photo: Set(journalist.profile_photo.as_ref().map(to_json).transpose()?),
            areas_of_coverage: Set(to_json(&journalist.areas_of_coverage)?),
            is_active: Set(journalist.is_active),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        to_journalist(updated)
    }
}

#[async_trait]
impl JournalistRepository for JournalistRepositoryPostgres {
    async fn delete_by_owner(&self, owner: UserId) -> Result<Option<Journalist>, ProfileStoreError> {
        let Some(model) = find_model(&*self.db, owner).await? else {
            return Ok(None);
        };

        model.clone().delete(&*self.db).await.map_err(map_db_err)?;
        to_journalist(model).map(Some)
    }

    async fn verify(&self, id: Uuid) -> Result<Option<Journalist>, ProfileStoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let Some(model) = Entity::find_by_id(id).one(&txn).await.map_err(map_db_err)? else {
            return Ok(None);
        };
        let owner = model.user_id;

        let mut active: ActiveModel = model.into();
        active.is_verified = Set(true);
        active.verified_at = Set(Some(Utc::now().fixed_offset()));
        let verified = active.update(&txn).await.map_err(map_db_err)?;

        users::Entity::update_many()
            .col_expr(users::Column::IsVerified, Expr::value(true))
            .filter(users::Column::Id.eq(owner))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        to_journalist(verified).map(Some)
    }
}

async fn find_model<C>(db: &C, owner: UserId) -> Result<Option<Model>, ProfileStoreError>
where
    C: ConnectionTrait,
{
    Entity::find()
        .filter(Column::UserId.eq(owner.value()))
        .one(db)
        .await
        .map_err(map_db_err)
}

pub(crate) fn to_journalist(model: Model) -> Result<Journalist, ProfileStoreError> {
    model.to_journalist().map_err(ProfileStoreError::Database)
}
