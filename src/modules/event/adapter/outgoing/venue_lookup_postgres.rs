use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::event_repository_postgres::map_db_err;
use super::sea_orm_entity::events::to_event_venue;
use crate::auth::application::domain::entities::UserId;
use crate::event::application::{
    domain::entities::EventVenue,
    ports::outgoing::{EventStoreError, VenueLookup},
};
use crate::venue::adapter::outgoing::sea_orm_entity::venues::{Column, Entity};

/// Resolves the caller's active venue profile for event ownership checks.
#[derive(Clone, Debug)]
pub struct VenueLookupPostgres {
    db: Arc<DatabaseConnection>,
}

impl VenueLookupPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VenueLookup for VenueLookupPostgres {
    async fn find_by_owner(&self, owner: UserId) -> Result<Option<EventVenue>, EventStoreError> {
        Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|model| to_event_venue(model).map_err(EventStoreError::Database))
            .transpose()
    }
}
