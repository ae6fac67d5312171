use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::admin::application::{
    domain::entities::{ContentKind, RoleCount},
    ports::outgoing::{AdminStoreError, DashboardQuery},
};
use crate::artist::adapter::outgoing::sea_orm_entity::artists;
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::{Role, UserView};
use crate::contact::adapter::outgoing::sea_orm_entity::contacts;
use crate::event::adapter::outgoing::sea_orm_entity::events;
use crate::event::application::domain::entities::Event;
use crate::news::adapter::outgoing::sea_orm_entity::news;
use crate::venue::adapter::outgoing::sea_orm_entity::venues;

#[derive(Debug, FromQueryResult)]
struct RoleCountRow {
    role: String,
    count: i64,
}

#[derive(Clone, Debug)]
pub struct DashboardQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DashboardQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DashboardQuery for DashboardQueryPostgres {
    async fn count_users(&self) -> Result<u64, AdminStoreError> {
        users::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn count_active(&self, kind: ContentKind) -> Result<u64, AdminStoreError> {
        let db = &*self.db;
        let count = match kind {
            ContentKind::Artist => {
                artists::Entity::find()
                    .filter(artists::Column::IsActive.eq(true))
                    .count(db)
                    .await
            }
            ContentKind::Venue => {
                venues::Entity::find()
                    .filter(venues::Column::IsActive.eq(true))
                    .count(db)
                    .await
            }
            ContentKind::News => {
                news::Entity::find()
                    .filter(news::Column::IsActive.eq(true))
                    .count(db)
                    .await
            }
            ContentKind::Event => {
                events::Entity::find()
                    .filter(events::Column::IsActive.eq(true))
                    .count(db)
                    .await
            }
        };

        count.map_err(map_db_err)
    }

    async fn count_unread_contacts(&self) -> Result<u64, AdminStoreError> {
        contacts::Entity::find()
            .filter(contacts::Column::IsRead.eq(false))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn users_by_role(&self) -> Result<Vec<RoleCount>, AdminStoreError> {
        let rows = users::Entity::find()
            .select_only()
            .column(users::Column::Role)
            .column_as(users::Column::Id.count(), "count")
            .group_by(users::Column::Role)
            .into_model::<RoleCountRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|row| {
                let role = Role::parse(&row.role).ok_or_else(|| {
                    AdminStoreError::Database(format!("Unknown role '{}'", row.role))
                })?;
                Ok(RoleCount {
                    role,
                    count: row.count.max(0) as u64,
                })
            })
            .collect()
    }

    async fn recent_users(&self, limit: u64) -> Result<Vec<UserView>, AdminStoreError> {
        users::Entity::find()
            .order_by_desc(users::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|model| {
                model
                    .to_user()
                    .map(UserView::from)
                    .map_err(AdminStoreError::Database)
            })
            .collect()
    }

    async fn upcoming_events(
        &self,
        from: NaiveDate,
        limit: u64,
    ) -> Result<Vec<Event>, AdminStoreError> {
        events::Entity::find()
            .filter(events::Column::IsActive.eq(true))
            .filter(events::Column::Date.gte(from))
            .order_by_asc(events::Column::Date)
            .order_by_asc(events::Column::Time)
            .limit(limit)
            .find_also_related(venues::Entity)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|(event, venue)| event.to_event(venue).map_err(AdminStoreError::Database))
            .collect()
    }
}

pub(crate) fn map_db_err(e: DbErr) -> AdminStoreError {
    AdminStoreError::Database(e.to_string())
}
