use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::events::{ActiveModel, Column, Entity, Model};
use crate::event::application::{
    domain::entities::{Event, NewEvent},
    ports::outgoing::{EventRepository, EventStoreError},
};
use crate::shared::db::is_unique_violation;
use crate::shared::domain::assignment::event_color;
use crate::venue::adapter::outgoing::sea_orm_entity::venues;

const SEQUENCE_UNIQUE_INDEX: &str = "idx_events_venue_sequence_unique";
const MAX_INSERT_ATTEMPTS: u32 = 5;

#[derive(Clone, Debug)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Zero-based position of the next event of `venue_id`.
    ///
    /// The first attempt uses the event count; retries step past the highest sequence taken.
    async fn next_sequence(&self, venue_id: Uuid, attempt: u32) -> Result<u64, EventStoreError> {
        let of_venue = Entity::find().filter(Column::VenueId.eq(venue_id));

        if attempt == 1 {
            return of_venue.count(&*self.db).await.map_err(map_db_err);
        }

        let highest = of_venue
            .select_only()
            .column_as(Column::Sequence.max(), "max_sequence")
            .into_tuple::<Option<i32>>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .flatten();

        Ok(highest.map_or(0, |max| max.max(0) as u64 + 1))
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn insert(&self, new: NewEvent) -> Result<Event, EventStoreError> {
        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let sequence = self.next_sequence(new.venue_id, attempt).await?;
            let now = Utc::now().fixed_offset();

            let model = ActiveModel {
                id: Set(Uuid::new_v4()),
                venue_id: Set(new.venue_id),
                artist_band_name: Set(new.artist_band_name.clone()),
                time: Set(new.time.clone()),
                date: Set(new.date),
                description: Set(new.description.clone()),
                city: Set(new.city.as_str().to_string()),
                color: Set(event_color(sequence).to_string()),
                sequence: Set(sequence as i32),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
            };

            match model.insert(&*self.db).await {
                Ok(created) => return to_event(created, None),
                Err(e) if is_unique_violation(&e, Some(SEQUENCE_UNIQUE_INDEX)) => {
                    tracing::debug!(
                        venue_id = %new.venue_id,
                        sequence,
                        attempt,
                        "Event sequence taken, recounting"
                    );
                }
                Err(e) => return Err(map_db_err(e)),
            }
        }

        tracing::warn!(venue_id = %new.venue_id, "Event sequence still contended after retries");
        Err(EventStoreError::Contended)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, EventStoreError> {
        Entity::find_by_id(id)
            .find_also_related(venues::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|(event, venue)| to_event(event, venue))
            .transpose()
    }

    async fn update(&self, event: Event) -> Result<Event, EventStoreError> {
        let model = ActiveModel {
            id: Unchanged(event.id),
            artist_band_name: Set(event.artist_band_name),
            time: Set(event.time),
            date: Set(event.date),
            description: Set(event.description),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        let mut stored = to_event(updated, None)?;
        stored.venue = event.venue;
        Ok(stored)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, EventStoreError> {
        let result = Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

pub(crate) fn map_db_err(e: DbErr) -> EventStoreError {
    EventStoreError::Database(e.to_string())
}

pub(crate) fn to_event(model: Model, venue: Option<venues::Model>) -> Result<Event, EventStoreError> {
    model.to_event(venue).map_err(EventStoreError::Database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::adapter::outgoing::sea_orm_entity::events::fixtures::event_model;
    use crate::shared::domain::City;
    use crate::venue::adapter::outgoing::sea_orm_entity::venues::fixtures::venue_model;
    use chrono::NaiveDate;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr, Value};

    fn new_event(venue_id: Uuid) -> NewEvent {
        NewEvent {
            venue_id,
            city: City::Mobile,
            artist_band_name: "Big Sam's Funky Nation".into(),
            time: "9pm".into(),
            date: NaiveDate::from_ymd_opt(2030, 4, 12).unwrap(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequence_from_count() {
        let venue_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "num_items" => Value::BigInt(Some(3)),
            }]])
            .append_query_results(vec![vec![event_model(Uuid::new_v4(), venue_id, 3, "#800080")]])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let event = repo.insert(new_event(venue_id)).await.unwrap();

        assert_eq!(event.sequence, 3);
        assert_eq!(event.color, "#800080");
        assert!(event.venue.is_none());
    }

    #[tokio::test]
    async fn test_insert_retries_after_sequence_collision() {
        // Arrange
        let venue_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "num_items" => Value::BigInt(Some(1)),
            }]])
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(format!(
                "duplicate key value violates unique constraint \"{SEQUENCE_UNIQUE_INDEX}\""
            )))])
            .append_query_results(vec![vec![btreemap! {
                "max_sequence" => Value::Int(Some(1)),
            }]])
            .append_query_results(vec![vec![event_model(Uuid::new_v4(), venue_id, 2, "#FF0000")]])
            .into_connection();

        // Act
        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let event = repo.insert(new_event(venue_id)).await.unwrap();

        // Assert
        assert_eq!(event.sequence, 2);
        assert_eq!(event.color, "#FF0000");
    }

    #[tokio::test]
    async fn test_find_by_id_joins_venue() {
        let venue_id = Uuid::new_v4();
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![(
                event_model(id, venue_id, 0, "#0000FF"),
                venue_model(venue_id, Uuid::new_v4(), "mobile", 1),
            )]])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let event = repo.find_by_id(id).await.unwrap().unwrap();

        let venue = event.venue.unwrap();
        assert_eq!(venue.id, venue_id);
        assert_eq!(venue.venue_name, "Tipitina's");
    }

    #[tokio::test]
    async fn test_soft_delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        assert!(!repo.soft_delete(Uuid::new_v4()).await.unwrap());
    }
}
