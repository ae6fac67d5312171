use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::venues::{Column, Entity};
use super::venue_repository_postgres::to_venue;
use crate::profile::adapter::outgoing::map_db_err;
use crate::profile::application::ports::outgoing::ProfileStoreError;
use crate::shared::domain::City;
use crate::venue::application::{
    domain::entities::{CalendarEntry, Venue},
    ports::outgoing::VenueQuery,
};

#[derive(Clone, Debug)]
pub struct VenueQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VenueQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VenueQuery for VenueQueryPostgres {
    async fn list_active(&self, city: City) -> Result<Vec<Venue>, ProfileStoreError> {
        Entity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::City.eq(city.as_str()))
            .order_by_asc(Column::VenueName)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_venue)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Venue>, ProfileStoreError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_venue)
            .transpose()
    }

    async fn calendar(&self, city: City) -> Result<Vec<CalendarEntry>, ProfileStoreError> {
        let venues = Entity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::City.eq(city.as_str()))
            .order_by_asc(Column::RegistrationOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        venues
            .into_iter()
            .map(|m| to_venue(m).map(CalendarEntry::from))
            .collect()
    }
}
