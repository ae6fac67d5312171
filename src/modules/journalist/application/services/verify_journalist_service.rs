use async_trait::async_trait;
use uuid::Uuid;

use crate::journalist::application::{
    domain::entities::Journalist,
    ports::{incoming::VerifyJournalistUseCase, outgoing::JournalistRepository},
};
use crate::profile::application::services::ProfileError;

pub struct VerifyJournalistService<R>
where
    R: JournalistRepository,
{
    repo: R,
}

impl<R> VerifyJournalistService<R>
where
    R: JournalistRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> VerifyJournalistUseCase for VerifyJournalistService<R>
where
    R: JournalistRepository,
{
    async fn execute(&self, id: Uuid) -> Result<Journalist, ProfileError> {
        let journalist = self.repo.verify(id).await?.ok_or(ProfileError::NotFound)?;

        tracing::info!(journalist_id = %id, owner = %journalist.user_id, "Journalist verified");
        Ok(journalist)
    }
}
