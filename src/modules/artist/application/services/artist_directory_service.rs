use async_trait::async_trait;
use uuid::Uuid;

use crate::artist::application::{
    domain::entities::Artist,
    ports::{
        incoming::{GetArtistUseCase, ListArtistsUseCase},
        outgoing::ArtistQuery,
    },
};
use crate::profile::application::services::ProfileError;
use crate::shared::domain::Genre;

pub struct ArtistDirectoryService<Q>
where
    Q: ArtistQuery,
{
    query: Q,
}

impl<Q> ArtistDirectoryService<Q>
where
    Q: ArtistQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListArtistsUseCase for ArtistDirectoryService<Q>
where
    Q: ArtistQuery,
{
    async fn execute(&self, genre: Option<Genre>) -> Result<Vec<Artist>, ProfileError> {
        Ok(self.query.list_active(genre).await?)
    }
}

#[async_trait]
impl<Q> GetArtistUseCase for ArtistDirectoryService<Q>
where
    Q: ArtistQuery,
{
    async fn execute(&self, id: Uuid) -> Result<Artist, ProfileError> {
        self.query
            .find_active_by_id(id)
            .await?
            .ok_or(ProfileError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::application::domain::entities::fixtures::artist;
    use crate::auth::application::domain::entities::UserId;
    use crate::profile::application::ports::outgoing::ProfileStoreError;
    use std::sync::Mutex;

    struct MockArtistQuery {
        artists: Vec<Artist>,
        seen_genre: Mutex<Option<Option<Genre>>>,
    }

    #[async_trait]
    impl ArtistQuery for MockArtistQuery {
        async fn list_active(&self, genre: Option<Genre>) -> Result<Vec<Artist>, ProfileStoreError> {
            *self.seen_genre.lock().unwrap() = Some(genre);
            Ok(self.artists.clone())
        }

        async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Artist>, ProfileStoreError> {
            Ok(self.artists.iter().find(|a| a.id == id).cloned())
        }
    }

    fn service(artists: Vec<Artist>) -> ArtistDirectoryService<MockArtistQuery> {
        ArtistDirectoryService::new(MockArtistQuery {
            artists,
            seen_genre: Mutex::new(None),
        })
    }

    #[tokio::test]
    async fn list_passes_genre_filter_through() {
        let svc = service(vec![artist(UserId::from(Uuid::new_v4()))]);

        let artists = ListArtistsUseCase::execute(&svc, Some(Genre::Jazz)).await.unwrap();

        assert_eq!(artists.len(), 1);
        assert_eq!(*svc.query.seen_genre.lock().unwrap(), Some(Some(Genre::Jazz)));
    }

    #[tokio::test]
    async fn unknown_or_inactive_artist_is_not_found() {
        let svc = service(vec![]);

        let result = GetArtistUseCase::execute(&svc, Uuid::new_v4()).await;

        assert!(matches!(result, Err(ProfileError::NotFound)));
    }
}
