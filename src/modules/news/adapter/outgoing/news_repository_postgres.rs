use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::news::{ActiveModel, Column, Entity, Model};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::news::application::{
    domain::entities::{NewNews, News},
    ports::outgoing::{NewsRepository, NewsStoreError},
};
use crate::storage::application::domain::entities::StoredFile;

#[derive(Clone, Debug)]
pub struct NewsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewsRepository for NewsRepositoryPostgres {
    async fn insert(&self, new: NewNews) -> Result<News, NewsStoreError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(new.author_id.value()),
            title: Set(new.draft.title),
            description: Set(new.draft.description),
            location: Set(new.draft.location.as_str().to_string()),
            credit: Set(new.draft.credit),
            photos: Set(photos_json(&new.photos)?),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await.map_err(map_db_err)?;
        to_news(created, None)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<News>, NewsStoreError> {
        Entity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|(news, author)| to_news(news, author))
            .transpose()
    }

    async fn update(&self, news: News) -> Result<News, NewsStoreError> {
        let model = ActiveModel {
            id: Unchanged(news.id),
            title: Set(news.title),
            description: Set(news.description),
            location: Set(news.location.as_str().to_string()),
            credit: Set(news.credit),
            photos: Set(photos_json(&news.photos)?),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        let mut stored = to_news(updated, None)?;
        stored.author = news.author;
        Ok(stored)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, NewsStoreError> {
        let result = Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::Photos, Expr::value(serde_json::json!([])))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

pub(crate) fn map_db_err(e: DbErr) -> NewsStoreError {
    NewsStoreError::Database(e.to_string())
}

pub(crate) fn to_news(model: Model, author: Option<users::Model>) -> Result<News, NewsStoreError> {
    model.to_news(author).map_err(NewsStoreError::Database)
}

fn photos_json(photos: &[StoredFile]) -> Result<serde_json::Value, NewsStoreError> {
    serde_json::to_value(photos).map_err(|e| NewsStoreError::Database(format!("Invalid photos: {e}")))
}
