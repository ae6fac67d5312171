use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::contacts::{ActiveModel, Column, Entity};
use crate::contact::application::{
    domain::entities::{Contact, NewContact},
    ports::outgoing::{ContactRepository, ContactStoreError},
};
use crate::shared::pagination::{Page, PageRequest};

#[derive(Clone, Debug)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn insert(&self, new: NewContact) -> Result<Contact, ContactStoreError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(new.email),
            subject: Set(new.subject),
            message: Set(new.message),
            is_read: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(created.into())
    }

    async fn list_all(&self) -> Result<Vec<Contact>, ContactStoreError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn list_page(
        &self,
        read: Option<bool>,
        page: PageRequest,
    ) -> Result<Page<Contact>, ContactStoreError> {
        let mut query = Entity::find();
        if let Some(read) = read {
            query = query.filter(Column::IsRead.eq(read));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        let rows = query
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Page {
            items: rows.into_iter().map(Contact::from).collect(),
            total,
        })
    }

    async fn count_unread(&self) -> Result<u64, ContactStoreError> {
        Entity::find()
            .filter(Column::IsRead.eq(false))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn mark_read(&self, id: Uuid) -> Result<Option<Contact>, ContactStoreError> {
        let updated = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(updated.into_iter().next().map(Contact::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ContactStoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

fn map_db_err(e: DbErr) -> ContactStoreError {
    ContactStoreError::Database(e.to_string())
}
