use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::artists::{ActiveModel, Column, Entity, Model};
use crate::artist::application::{
    domain::entities::{Artist, NewArtist},
    ports::outgoing::ArtistRepository,
};
use crate::auth::application::domain::entities::UserId;
use crate::profile::adapter::outgoing::{map_db_err, to_json};
use crate::profile::application::ports::outgoing::{ProfileStore, ProfileStoreError};
use crate::shared::db::is_unique_violation;

const OWNER_UNIQUE_INDEX: &str = "idx_artists_user_id_unique";

#[derive(Clone, Debug)]
pub struct ArtistRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ArtistRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for ArtistRepositoryPostgres {
    type Profile = Artist;
    type New = NewArtist;

    async fn find_by_owner(&self, owner: UserId) -> Result<Option<Artist>, ProfileStoreError> {
        find_model(&self.db, owner)
            .await?
            .map(to_artist)
            .transpose()
    }

    async fn insert(&self, owner: UserId, new: NewArtist) -> Result<Artist, ProfileStoreError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner.value()),
            name: Set(new.name),
            city: Set(new.city),
            genre: Set(new.genre.as_str().to_string()),
            biography: Set(new.biography),
            photos: Set(to_json(&new.photos)?),
            audio_track: Set(new.audio_track.as_ref().map(to_json).transpose()?),
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

        to_artist(created)
    }

    async fn update(&self, artist: Artist) -> Result<Artist, ProfileStoreError> {
        let model = ActiveModel {
            id: Unchanged(artist.id),
            user_id: Unchanged(artist.user_id.value()),
            name: Set(artist.name),
            city: Set(artist.city),
            genre: Set(artist.genre.as_str().to_string()),
            biography: Set(artist.biography),
            photos: Set(to_json(&artist.photos)?),
            audio_track: Set(artist.audio_track.as_ref().map(to_json).transpose()?),
            is_active: Set(artist.is_active),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        to_artist(updated)
    }
}

#[async_trait]
impl ArtistRepository for ArtistRepositoryPostgres {
    async fn delete_by_owner(&self, owner: UserId) -> Result<Option<Artist>, ProfileStoreError> {
        let Some(model) = find_model(&self.db, owner).await? else {
            return Ok(None);
        };

        model.clone().delete(&*self.db).await.map_err(map_db_err)?;
        to_artist(model).map(Some)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn find_model(db: &DatabaseConnection, owner: UserId) -> Result<Option<Model>, ProfileStoreError> {
    Entity::find()
        .filter(Column::UserId.eq(owner.value()))
        .one(db)
        .await
        .map_err(map_db_err)
}

pub(crate) fn to_artist(model: Model) -> Result<Artist, ProfileStoreError> {
    model.to_artist().map_err(ProfileStoreError::Database)
}
