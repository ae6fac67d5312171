use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};
use std::sync::Arc;

use super::news_repository_postgres::{map_db_err, to_news};
use super::sea_orm_entity::news::{Column, Entity};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::news::application::{
    domain::entities::News,
    ports::outgoing::{NewsQuery, NewsStoreError},
};
use crate::shared::domain::City;

#[derive(Clone, Debug)]
pub struct NewsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: Select<Entity>) -> Result<Vec<News>, NewsStoreError> {
        query
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::CreatedAt)
            .find_also_related(users::Entity)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|(news, author)| to_news(news, author))
            .collect()
    }
}

#[async_trait]
impl NewsQuery for NewsQueryPostgres {
    async fn list_active(&self, location: Option<City>) -> Result<Vec<News>, NewsStoreError> {
        let mut query = Entity::find();

        if let Some(city) = location {
            query = query.filter(Column::Location.eq(city.as_str()));
        }

        self.fetch(query).await
    }

    async fn by_author(&self, author: UserId) -> Result<Vec<News>, NewsStoreError> {
        self.fetch(Entity::find().filter(Column::AuthorId.eq(author.value())))
            .await
    }
}
