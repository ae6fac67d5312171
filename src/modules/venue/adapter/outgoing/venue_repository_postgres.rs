use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::venues::{ActiveModel, Column, Entity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::profile::adapter::outgoing::{map_db_err, to_json};
use crate::profile::application::ports::outgoing::{ProfileStore, ProfileStoreError};
use crate::shared::db::is_unique_violation;
use crate::shared::domain::{
    assignment::{next_registration_order, venue_color},
    City,
};
use crate::venue::application::{
    domain::entities::{NewVenue, Show, Venue},
    ports::outgoing::VenueRepository,
};

const OWNER_UNIQUE_INDEX: &str = "idx_venues_user_id_unique";
const ORDER_UNIQUE_INDEX: &str = "idx_venues_registration_city_order_unique";
const MAX_INSERT_ATTEMPTS: u32 = 5;

#[derive(Clone, Debug)]
pub struct VenueRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VenueRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Registration order for the next venue of `city`.
    ///
    /// The first attempt uses the count of venues currently in the city. Retries use the highest
    /// slot allocated in the city so far, which also steps over slots whose venues moved away.
    async fn registration_order(&self, city: City, attempt: u32) -> Result<u64, ProfileStoreError> {
        if attempt == 1 {
            let count = Entity::find()
                .filter(Column::City.eq(city.as_str()))
                .count(&*self.db)
                .await
                .map_err(map_db_err)?;
            return Ok(next_registration_order(count));
        }

        let highest = Entity::find()
            .filter(Column::RegistrationCity.eq(city.as_str()))
            .select_only()
            .column_as(Column::RegistrationOrder.max(), "max_order")
            .into_tuple::<Option<i32>>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .flatten()
            .unwrap_or(0);

        Ok(next_registration_order(highest.max(0) as u64))
    }
}

#[async_trait]
impl ProfileStore for VenueRepositoryPostgres {
    type Profile = Venue;
    type New = NewVenue;

    async fn find_by_owner(&self, owner: UserId) -> Result<Option<Venue>, ProfileStoreError> {
        find_model(&self.db, owner).await?.map(to_venue).transpose()
    }

    async fn insert(&self, owner: UserId, new: NewVenue) -> Result<Venue, ProfileStoreError> {
        let photos = to_json(&new.photos)?;

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let order = self.registration_order(new.city, attempt).await?;
            let now = Utc::now().fixed_offset();

            let model = ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(owner.value()),
                venue_name: Set(new.venue_name.clone()),
                city: Set(new.city.as_str().to_string()),
                address: Set(new.address.clone()),
                seating_capacity: Set(new.seating_capacity as i32),
                biography: Set(new.biography.clone()),
                open_hours: Set(new.open_hours.clone()),
                open_days: Set(new.open_days.clone()),
                photos: Set(photos.clone()),
                registration_order: Set(order as i32),
                registration_city: Set(new.city.as_str().to_string()),
                color_code: Set(venue_color(order).to_string()),
                shows: Set(serde_json::json!([])),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
            };

            match model.insert(&*self.db).await {
                Ok(created) => return to_venue(created),
                Err(e) if is_unique_violation(&e, Some(OWNER_UNIQUE_INDEX)) => {
                    return Err(ProfileStoreError::OwnerTaken)
                }
                Err(e) if is_unique_violation(&e, Some(ORDER_UNIQUE_INDEX)) => {
                    tracing::debug!(
                        city = %new.city,
                        registration_order = order,
                        attempt,
                        "Registration order taken, recounting"
                    );
                }
                Err(e) => return Err(map_db_err(e)),
            }
        }

        tracing::warn!(city = %new.city, "Venue registration order still contended after retries");
        Err(ProfileStoreError::Contended)
    }

    /// Registration slot and colour are left untouched, so a move never competes for the new
    /// city's slots.
    async fn update(&self, venue: Venue) -> Result<Venue, ProfileStoreError> {
        let model = ActiveModel {
            id: Unchanged(venue.id),
            user_id: Unchanged(venue.user_id.value()),
            venue_name: Set(venue.venue_name),
            city: Set(venue.city.as_str().to_string()),
            address: Set(venue.address),
            seating_capacity: Set(venue.seating_capacity as i32),
            biography: Set(venue.biography),
            open_hours: Set(venue.open_hours),
            open_days: Set(venue.open_days),
            photos: Set(to_json(&venue.photos)?),
            is_active: Set(venue.is_active),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        to_venue(updated)
    }
}

#[async_trait]
impl VenueRepository for VenueRepositoryPostgres {
    async fn soft_delete_by_owner(&self, owner: UserId) -> Result<Option<Venue>, ProfileStoreError> {
        let Some(model) = find_model(&self.db, owner).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.is_active = Set(false);
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        to_venue(updated).map(Some)
    }

    async fn append_show(&self, owner: UserId, show: Show) -> Result<Option<Venue>, ProfileStoreError> {
        let Some(model) = find_model(&self.db, owner).await? else {
            return Ok(None);
        };

        // Concatenated in the database so two shows added at once both survive
        Entity::update_many()
            .col_expr(
                Column::Shows,
                Expr::cust_with_values("shows || ?::jsonb", [to_json(&[show])?]),
            )
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(model.id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Entity::find_by_id(model.id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_venue)
            .transpose()
    }
}

async fn find_model(db: &DatabaseConnection, owner: UserId) -> Result<Option<Model>, ProfileStoreError> {
    Entity::find()
        .filter(Column::UserId.eq(owner.value()))
        .one(db)
        .await
        .map_err(map_db_err)
}

pub(crate) fn to_venue(model: Model) -> Result<Venue, ProfileStoreError> {
    model.to_venue().map_err(ProfileStoreError::Database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::adapter::outgoing::sea_orm_entity::venues::fixtures::venue_model;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, Value};

    fn new_venue(city: City) -> NewVenue {
        NewVenue {
            venue_name: "Vinyl Music Hall".into(),
            city,
            address: "2 S Palafox".into(),
            seating_capacity: 650,
            biography: None,
            open_hours: "7pm - 2am".into(),
            open_days: "Every day".into(),
            photos: vec![],
        }
    }

    fn unique_violation(index: &str) -> DbErr {
        DbErr::Query(RuntimeErr::Internal(format!(
            "duplicate key value violates unique constraint \"{index}\""
        )))
    }

    #[tokio::test]
    async fn test_insert_counts_city_then_creates() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "num_items" => Value::BigInt(Some(2)),
            }]])
            .append_query_results(vec![vec![venue_model(Uuid::new_v4(), owner, "pensacola", 3)]])
            .into_connection();

        let repo = VenueRepositoryPostgres::new(Arc::new(db));
        let venue = repo.insert(UserId::from(owner), new_venue(City::Pensacola)).await.unwrap();

        assert_eq!(venue.registration_order, 3);
        assert_eq!(venue.color_code, "Red");
    }

    #[tokio::test]
    async fn test_insert_retries_after_order_collision() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "num_items" => Value::BigInt(Some(0)),
            }]])
            .append_query_errors(vec![unique_violation(ORDER_UNIQUE_INDEX)])
            .append_query_results(vec![vec![btreemap! {
                "max_order" => Value::Int(Some(1)),
            }]])
            .append_query_results(vec![vec![venue_model(Uuid::new_v4(), owner, "mobile", 2)]])
            .into_connection();

        let repo = VenueRepositoryPostgres::new(Arc::new(db));
        let venue = repo.insert(UserId::from(owner), new_venue(City::Mobile)).await.unwrap();

        assert_eq!(venue.registration_order, 2);
        assert_eq!(venue.color_code, "Green");
    }

    #[tokio::test]
    async fn test_insert_maps_owner_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "num_items" => Value::BigInt(Some(0)),
            }]])
            .append_query_errors(vec![unique_violation(OWNER_UNIQUE_INDEX)])
            .into_connection();

        let repo = VenueRepositoryPostgres::new(Arc::new(db));
        let result = repo.insert(UserId::from(Uuid::new_v4()), new_venue(City::Biloxi)).await;

        assert_eq!(result.unwrap_err(), ProfileStoreError::OwnerTaken);
    }

    #[tokio::test]
    async fn test_retry_reads_slots_allocated_in_city() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "num_items" => Value::BigInt(Some(1)),
            }]])
            .append_query_errors(vec![unique_violation(ORDER_UNIQUE_INDEX)])
            .append_query_results(vec![vec![btreemap! {
                "max_order" => Value::Int(Some(3)),
            }]])
            .append_query_results(vec![vec![venue_model(Uuid::new_v4(), owner, "mobile", 4)]])
            .into_connection();
        let db = Arc::new(db);

        let repo = VenueRepositoryPostgres::new(Arc::clone(&db));
        let venue = repo.insert(UserId::from(owner), new_venue(City::Mobile)).await.unwrap();
        assert_eq!(venue.registration_order, 4);

        drop(repo);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let retry_query = format!("{:?}", log[2]);
        assert!(retry_query.contains("registration_city"));
    }

    #[tokio::test]
    async fn test_move_to_taken_city_leaves_registration_slot_alone() {
        let owner = Uuid::new_v4();
        let id = Uuid::new_v4();
        // First venue of Biloxi moves to Mobile, whose slot 1 is already held
        let mut moved = venue_model(id, owner, "mobile", 1);
        moved.registration_city = "biloxi".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![moved]])
            .into_connection();
        let db = Arc::new(db);

        let mut venue = venue_model(id, owner, "biloxi", 1).to_venue().unwrap();
        venue.city = City::Mobile;

        let repo = VenueRepositoryPostgres::new(Arc::clone(&db));
        let updated = repo.update(venue).await.unwrap();

        assert_eq!(updated.city, City::Mobile);
        assert_eq!(updated.registration_order, 1);
        assert_eq!(updated.color_code, "Blue");

        drop(repo);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let statement = format!("{:?}", log[0]);
        let set_clause = statement.split("RETURNING").next().unwrap();
        assert!(set_clause.contains("UPDATE"));
        assert!(!set_clause.contains("registration_city"));
        assert!(!set_clause.contains("registration_order"));
    }

    #[tokio::test]
    async fn test_soft_delete_returns_inactive_venue() {
        let owner = Uuid::new_v4();
        let id = Uuid::new_v4();
        let mut inactive = venue_model(id, owner, "biloxi", 1);
        inactive.is_active = false;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![venue_model(id, owner, "biloxi", 1)]])
            .append_query_results(vec![vec![inactive]])
            .into_connection();

        let repo = VenueRepositoryPostgres::new(Arc::new(db));
        let venue = repo.soft_delete_by_owner(UserId::from(owner)).await.unwrap().unwrap();

        assert!(!venue.is_active);
    }

    #[tokio::test]
    async fn test_append_show_rereads_row() {
        let owner = Uuid::new_v4();
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![venue_model(id, owner, "new orleans", 1)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![venue_model(id, owner, "new orleans", 1)]])
            .into_connection();

        let repo = VenueRepositoryPostgres::new(Arc::new(db));
        let show = Show {
            artist: "Dumpstaphunk".into(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            time: "10pm".into(),
        };
        let venue = repo.append_show(UserId::from(owner), show).await.unwrap().unwrap();

        assert_eq!(venue.shows[0].artist, "Dumpstaphunk");
        assert_eq!(venue.city, City::NewOrleans);
    }

    #[tokio::test]
    async fn test_append_show_without_venue() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = VenueRepositoryPostgres::new(Arc::new(db));
        let show = Show {
            artist: "x".into(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            time: "9pm".into(),
        };

        assert!(repo.append_show(UserId::from(Uuid::new_v4()), show).await.unwrap().is_none());
    }
}
