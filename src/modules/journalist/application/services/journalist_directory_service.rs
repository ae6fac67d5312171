use async_trait::async_trait;
use uuid::Uuid;

use crate::journalist::application::{
    domain::entities::Journalist,
    ports::{
        incoming::{GetJournalistUseCase, ListJournalistsUseCase},
        outgoing::JournalistQuery,
    },
};
use crate::profile::application::services::ProfileError;

pub struct JournalistDirectoryService<Q>
where
    Q: JournalistQuery,
{
    query: Q,
}

impl<Q> JournalistDirectoryService<Q>
where
    Q: JournalistQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListJournalistsUseCase for JournalistDirectoryService<Q>
where
    Q: JournalistQuery,
{
    async fn execute(&self) -> Result<Vec<Journalist>, ProfileError> {
        Ok(self.query.list_active().await?)
    }
}

#[async_trait]
impl<Q> GetJournalistUseCase for JournalistDirectoryService<Q>
where
    Q: JournalistQuery,
{
    async fn execute(&self, id: Uuid) -> Result<Journalist, ProfileError> {
        self.query.find_by_id(id).await?.ok_or(ProfileError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::journalist::application::domain::entities::fixtures::journalist;
    use crate::profile::application::ports::outgoing::ProfileStoreError;

    struct MockJournalistQuery {
        journalists: Vec<Journalist>,
    }

    #[async_trait]
    impl JournalistQuery for MockJournalistQuery {
        async fn list_active(&self) -> Result<Vec<Journalist>, ProfileStoreError> {
            Ok(self.journalists.iter().filter(|j| j.is_active).cloned().collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Journalist>, ProfileStoreError> {
            Ok(self.journalists.iter().find(|j| j.id == id).cloned())
        }
    }

    #[tokio::test]
    async fn get_returns_known_journalist() {
        let known = journalist(UserId::from(Uuid::new_v4()));
        let svc = JournalistDirectoryService::new(MockJournalistQuery {
            journalists: vec![known.clone()],
        });

        let found = GetJournalistUseCase::execute(&svc, known.id).await.unwrap();
        let missing = GetJournalistUseCase::execute(&svc, Uuid::new_v4()).await;

        assert_eq!(found.id, known.id);
        assert!(matches!(missing, Err(ProfileError::NotFound)));
    }

    #[tokio::test]
    async fn list_returns_active_only() {
        let mut inactive = journalist(UserId::from(Uuid::new_v4()));
        inactive.is_active = false;
        let svc = JournalistDirectoryService::new(MockJournalistQuery {
            journalists: vec![journalist(UserId::from(Uuid::new_v4())), inactive],
        });

        let listed = ListJournalistsUseCase::execute(&svc).await.unwrap();

        assert_eq!(listed.len(), 1);
    }
}
