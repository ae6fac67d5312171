use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::event_repository_postgres::{map_db_err, to_event};
use super::sea_orm_entity::events::{Column, Entity};
use crate::event::application::{
    domain::entities::Event,
    ports::outgoing::{EventQuery, EventStoreError},
};
use crate::shared::domain::City;
use crate::venue::adapter::outgoing::sea_orm_entity::venues;

#[derive(Clone, Debug)]
pub struct EventQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: Select<Entity>) -> Result<Vec<Event>, EventStoreError> {
        query
            .find_also_related(venues::Entity)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|(event, venue)| to_event(event, venue))
            .collect()
    }
}

#[async_trait]
impl EventQuery for EventQueryPostgres {
    async fn list_active(&self, city: City) -> Result<Vec<Event>, EventStoreError> {
        let query = Entity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::City.eq(city.as_str()))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Time);

        self.fetch(query).await
    }

    async fn upcoming(&self, from: NaiveDate, limit: u64) -> Result<Vec<Event>, EventStoreError> {
        let query = Entity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Date.gte(from))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Time)
            .limit(limit);

        self.fetch(query).await
    }

    async fn for_venue(&self, venue_id: Uuid) -> Result<Vec<Event>, EventStoreError> {
        let query = Entity::find()
            .filter(Column::VenueId.eq(venue_id))
            .order_by_desc(Column::Date);

        self.fetch(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::adapter::outgoing::sea_orm_entity::events::{fixtures::event_model, Model};
    use crate::venue::adapter::outgoing::sea_orm_entity::venues::fixtures::venue_model;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    #[tokio::test]
    async fn test_list_active_attaches_venues() {
        let venue_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                (
                    event_model(Uuid::new_v4(), venue_id, 0, "#0000FF"),
                    Some(venue_model(venue_id, Uuid::new_v4(), "mobile", 1)),
                ),
                (event_model(Uuid::new_v4(), venue_id, 1, "#FF0000"), None),
            ]])
            .into_connection();

        let query = EventQueryPostgres::new(Arc::new(db));
        let events = query.list_active(City::Mobile).await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].venue.as_ref().unwrap().id, venue_id);
        assert!(events[1].venue.is_none());
        assert!(events.iter().all(|e| e.city == City::Mobile));
    }

    #[tokio::test]
    async fn test_for_venue_rejects_unknown_city() {
        let venue_id = Uuid::new_v4();
        let mut row = event_model(Uuid::new_v4(), venue_id, 0, "#0000FF");
        row.city = "houston".into();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![(row, None::<venues::Model>)]])
            .into_connection();

        let query = EventQueryPostgres::new(Arc::new(db));
        let result = query.for_venue(venue_id).await;

        assert!(matches!(result, Err(EventStoreError::Database(msg)) if msg.contains("houston")));
    }

    #[tokio::test]
    async fn test_upcoming_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = EventQueryPostgres::new(Arc::new(db));
        let result = query
            .upcoming(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(), 10)
            .await;

        assert!(matches!(result, Err(EventStoreError::Database(msg)) if msg.contains("connection timeout")));
    }

    #[tokio::test]
    async fn test_upcoming_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<(Model, Option<venues::Model>)>::new()])
            .into_connection();

        let query = EventQueryPostgres::new(Arc::new(db));
        let events = query
            .upcoming(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(), 10)
            .await
            .unwrap();

        assert!(events.is_empty());
    }
}
