use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::dashboard_query_postgres::map_db_err;
use crate::admin::application::{
    domain::entities::{ContentEntry, ContentItem, ContentKind, ContentOwner, UserFilter},
    ports::outgoing::{AdminStoreError, ModerationStore},
};
use crate::artist::adapter::outgoing::sea_orm_entity::artists;
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::{User, UserId, UserView};
use crate::event::adapter::outgoing::sea_orm_entity::events;
use crate::news::adapter::outgoing::sea_orm_entity::news;
use crate::shared::pagination::{Page, PageRequest};
use crate::venue::adapter::outgoing::sea_orm_entity::venues;

#[derive(Clone, Debug)]
pub struct ModerationStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ModerationStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn artist_entries(
        &self,
        select: Select<artists::Entity>,
    ) -> Result<Vec<ContentEntry>, AdminStoreError> {
        select
            .find_also_related(users::Entity)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|(artist, owner)| {
                let artist = artist.to_artist().map_err(AdminStoreError::Database)?;
                Ok(ContentEntry::owned_by(
                    ContentItem::Artist(artist),
                    owner.map(to_owner),
                ))
            })
            .collect()
    }

    async fn venue_entries(
        &self,
        select: Select<venues::Entity>,
    ) -> Result<Vec<ContentEntry>, AdminStoreError> {
        select
            .find_also_related(users::Entity)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|(venue, owner)| {
                let venue = venue.to_venue().map_err(AdminStoreError::Database)?;
                Ok(ContentEntry::owned_by(
                    ContentItem::Venue(venue),
                    owner.map(to_owner),
                ))
            })
            .collect()
    }

    async fn news_entries(
        &self,
        select: Select<news::Entity>,
    ) -> Result<Vec<ContentEntry>, AdminStoreError> {
        select
            .find_also_related(users::Entity)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|(story, author)| {
                story
                    .to_news(author)
                    .map(|n| ContentEntry::new(ContentItem::News(n)))
                    .map_err(AdminStoreError::Database)
            })
            .collect()
    }

    async fn event_entries(
        &self,
        select: Select<events::Entity>,
    ) -> Result<Vec<ContentEntry>, AdminStoreError> {
        select
            .find_also_related(venues::Entity)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|(event, venue)| {
                event
                    .to_event(venue)
                    .map(|e| ContentEntry::new(ContentItem::Event(e)))
                    .map_err(AdminStoreError::Database)
            })
            .collect()
    }
}

#[async_trait]
impl ModerationStore for ModerationStorePostgres {
    async fn list_users(&self, filter: &UserFilter) -> Result<Page<UserView>, AdminStoreError> {
        let mut query = users::Entity::find();

        if let Some(role) = filter.role {
            query = query.filter(users::Column::Role.eq(role.as_str()));
        }
        if let Some(verified) = filter.verified {
            query = query.filter(users::Column::IsVerified.eq(verified));
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
            query = query.filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(users::Column::Username))).like(pattern.clone()))
                    .add(Expr::expr(Func::lower(Expr::col(users::Column::Email))).like(pattern)),
            );
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        let items = query
            .order_by_desc(users::Column::CreatedAt)
            .offset(filter.page.offset())
            .limit(filter.page.limit())
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
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page { items, total })
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, AdminStoreError> {
        users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|model| model.to_user().map_err(AdminStoreError::Database))
            .transpose()
    }

    async fn verify_user(&self, id: Uuid) -> Result<Option<UserView>, AdminStoreError> {
        let updated = users::Entity::update_many()
            .col_expr(users::Column::IsVerified, Expr::value(true))
            .col_expr(users::Column::VerificationRequested, Expr::value(false))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(users::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(|model| {
                model
                    .to_user()
                    .map(UserView::from)
                    .map_err(AdminStoreError::Database)
            })
            .transpose()
    }

    async fn deactivate_user(&self, id: Uuid) -> Result<(), AdminStoreError> {
        users::Entity::update_many()
            .col_expr(users::Column::IsActive, Expr::value(false))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(users::Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn deactivate_profile(&self, kind: ContentKind, owner: Uuid) -> Result<(), AdminStoreError> {
        let now = Utc::now().fixed_offset();
        let db = &*self.db;

        match kind {
            ContentKind::Artist => {
                artists::Entity::update_many()
                    .col_expr(artists::Column::IsActive, Expr::value(false))
                    .col_expr(artists::Column::UpdatedAt, Expr::value(now))
                    .filter(artists::Column::UserId.eq(owner))
                    .exec(db)
                    .await
                    .map_err(map_db_err)?;
            }
            ContentKind::Venue => {
                venues::Entity::update_many()
                    .col_expr(venues::Column::IsActive, Expr::value(false))
                    .col_expr(venues::Column::UpdatedAt, Expr::value(now))
                    .filter(venues::Column::UserId.eq(owner))
                    .exec(db)
                    .await
                    .map_err(map_db_err)?;
            }
            ContentKind::News | ContentKind::Event => {}
        }

        Ok(())
    }

    async fn list_content(
        &self,
        kind: ContentKind,
        page: PageRequest,
    ) -> Result<Page<ContentEntry>, AdminStoreError> {
        let db = &*self.db;

        let (items, total) = match kind {
            ContentKind::Artist => {
                let select = artists::Entity::find().filter(artists::Column::IsActive.eq(true));
                let total = select.clone().count(db).await.map_err(map_db_err)?;
                let select = select
                    .order_by_desc(artists::Column::CreatedAt)
                    .offset(page.offset())
                    .limit(page.limit());
                (self.artist_entries(select).await?, total)
            }
            ContentKind::Venue => {
                let select = venues::Entity::find().filter(venues::Column::IsActive.eq(true));
                let total = select.clone().count(db).await.map_err(map_db_err)?;
                let select = select
                    .order_by_desc(venues::Column::CreatedAt)
                    .offset(page.offset())
                    .limit(page.limit());
                (self.venue_entries(select).await?, total)
            }
            ContentKind::News => {
                let select = news::Entity::find().filter(news::Column::IsActive.eq(true));
                let total = select.clone().count(db).await.map_err(map_db_err)?;
                let select = select
                    .order_by_desc(news::Column::CreatedAt)
                    .offset(page.offset())
                    .limit(page.limit());
                (self.news_entries(select).await?, total)
            }
            ContentKind::Event => {
                let select = events::Entity::find().filter(events::Column::IsActive.eq(true));
                let total = select.clone().count(db).await.map_err(map_db_err)?;
                let select = select
                    .order_by_desc(events::Column::CreatedAt)
                    .offset(page.offset())
                    .limit(page.limit());
                (self.event_entries(select).await?, total)
            }
        };

        Ok(Page { items, total })
    }

    async fn find_content(
        &self,
        kind: ContentKind,
        id: Uuid,
    ) -> Result<Option<ContentEntry>, AdminStoreError> {
        let entries = match kind {
            ContentKind::Artist => self.artist_entries(artists::Entity::find_by_id(id)).await?,
            ContentKind::Venue => self.venue_entries(venues::Entity::find_by_id(id)).await?,
            ContentKind::News => self.news_entries(news::Entity::find_by_id(id)).await?,
            ContentKind::Event => self.event_entries(events::Entity::find_by_id(id)).await?,
        };

        Ok(entries.into_iter().next())
    }

    async fn set_content_active(
        &self,
        kind: ContentKind,
        id: Uuid,
        active: bool,
    ) -> Result<Option<ContentEntry>, AdminStoreError> {
        let now = Utc::now().fixed_offset();
        let db = &*self.db;

        let result = match kind {
            ContentKind::Artist => {
                artists::Entity::update_many()
                    .col_expr(artists::Column::IsActive, Expr::value(active))
                    .col_expr(artists::Column::UpdatedAt, Expr::value(now))
                    .filter(artists::Column::Id.eq(id))
                    .exec(db)
                    .await
            }
            ContentKind::Venue => {
                venues::Entity::update_many()
                    .col_expr(venues::Column::IsActive, Expr::value(active))
                    .col_expr(venues::Column::UpdatedAt, Expr::value(now))
                    .filter(venues::Column::Id.eq(id))
                    .exec(db)
                    .await
            }
            ContentKind::News => {
                news::Entity::update_many()
                    .col_expr(news::Column::IsActive, Expr::value(active))
                    .col_expr(news::Column::UpdatedAt, Expr::value(now))
                    .filter(news::Column::Id.eq(id))
                    .exec(db)
                    .await
            }
            ContentKind::Event => {
                events::Entity::update_many()
                    .col_expr(events::Column::IsActive, Expr::value(active))
                    .col_expr(events::Column::UpdatedAt, Expr::value(now))
                    .filter(events::Column::Id.eq(id))
                    .exec(db)
                    .await
            }
        }
        .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_content(kind, id).await
    }
}

fn to_owner(user: users::Model) -> ContentOwner {
    ContentOwner {
        id: UserId::from(user.id),
        username: user.username,
        email: user.email,
    }
}

/// Escapes LIKE wildcards so a search for `100%` matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
