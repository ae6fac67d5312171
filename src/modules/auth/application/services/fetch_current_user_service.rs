use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserView},
    ports::{
        incoming::use_cases::{FetchCurrentUserUseCase, FetchUserError},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct FetchCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchCurrentUserUseCase for FetchCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserView, FetchUserError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserError::QueryError(e.to_string()))?
            .filter(|u| u.is_active)
            .map(UserView::from)
            .ok_or(FetchUserError::NotFound)
    }
}
