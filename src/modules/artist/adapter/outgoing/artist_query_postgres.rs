use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::artist_repository_postgres::to_artist;
use crate::profile::adapter::outgoing::map_db_err;
use super::sea_orm_entity::artists::{Column, Entity};
use crate::artist::application::{domain::entities::Artist, ports::outgoing::ArtistQuery};
use crate::profile::application::ports::outgoing::ProfileStoreError;
use crate::shared::domain::Genre;

#[derive(Clone, Debug)]
pub struct ArtistQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ArtistQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArtistQuery for ArtistQueryPostgres {
    async fn list_active(&self, genre: Option<Genre>) -> Result<Vec<Artist>, ProfileStoreError> {
        let mut query = Entity::find().filter(Column::IsActive.eq(true));

        if let Some(genre) = genre {
            query = query.filter(Column::Genre.eq(genre.as_str()));
        }

        query
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_artist)
            .collect()
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Artist>, ProfileStoreError> {
        Entity::find_by_id(id)
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_artist)
            .transpose()
    }
}
