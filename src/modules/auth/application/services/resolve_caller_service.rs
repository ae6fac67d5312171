use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{Caller, UserId},
    ports::{
        incoming::use_cases::{ResolveCallerError, ResolveCallerUseCase},
        outgoing::UserQuery,
    },
};

/// Re-reads the account on every authenticated request, so deletions and deactivations take
/// effect before the token expires.
#[derive(Debug, Clone)]
pub struct ResolveCallerService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ResolveCallerService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ResolveCallerUseCase for ResolveCallerService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Caller, ResolveCallerError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ResolveCallerError::QueryError(e.to_string()))?
            .ok_or(ResolveCallerError::UnknownAccount)?;

        if !user.is_active {
            return Err(ResolveCallerError::UnknownAccount);
        }

        Ok(Caller {
            user_id: user.id,
            role: user.role,
            is_verified: user.is_verified,
        })
    }
}
