use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::journalist_repository_postgres::to_journalist;
use super::sea_orm_entity::journalists::{Column, Entity};
use crate::journalist::application::{
    domain::entities::Journalist, ports::outgoing::JournalistQuery,
};
use crate::profile::adapter::outgoing::map_db_err;
use crate::profile::application::ports::outgoing::ProfileStoreError;

#[derive(Clone, Debug)]
pub struct JournalistQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JournalistQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JournalistQuery for JournalistQueryPostgres {
    async fn list_active(&self) -> Result<Vec<Journalist>, ProfileStoreError> {
        Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::FullName)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_journalist)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Journalist>, ProfileStoreError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_journalist)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journalist::adapter::outgoing::sea_orm_entity::journalists::fixtures::journalist_model;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_list_active_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                journalist_model(Uuid::new_v4(), Uuid::new_v4()),
                journalist_model(Uuid::new_v4(), Uuid::new_v4()),
            ]])
            .into_connection();

        let query = JournalistQueryPostgres::new(Arc::new(db));
        let journalists = query.list_active().await.unwrap();

        assert_eq!(journalists.len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_coverage_is_a_database_error() {
        let mut row = journalist_model(Uuid::new_v4(), Uuid::new_v4());
        row.areas_of_coverage = serde_json::json!(["atlantis"]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let query = JournalistQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ProfileStoreError::Database(msg)) if msg.contains("areas of coverage")));
    }
}
