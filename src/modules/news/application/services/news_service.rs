use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Caller, Role};
use crate::news::application::{
    domain::entities::{NewNews, News},
    ports::{
        incoming::{
            CreateNewsCommand, CreateNewsUseCase, DeleteNewsUseCase, GetNewsUseCase, NewsError,
            UpdateNewsCommand, UpdateNewsUseCase,
        },
        outgoing::NewsRepository,
    },
};
use crate::storage::application::{domain::entities::MediaFolder, services::MediaUploader};

const PHOTOS_FIELD: &str = "photos";

pub struct NewsService<R>
where
    R: NewsRepository,
{
    repo: R,
    uploader: MediaUploader,
}

impl<R> NewsService<R>
where
    R: NewsRepository,
{
    pub fn new(repo: R, uploader: MediaUploader) -> Self {
        Self { repo, uploader }
    }

    async fn authored_news(&self, caller: Caller, id: Uuid) -> Result<News, NewsError> {
        let news = self.repo.find_by_id(id).await?.ok_or(NewsError::NotFound)?;

        if caller.role == Role::Admin || news.author_id == caller.user_id {
            Ok(news)
        } else {
            Err(NewsError::NotAuthor)
        }
    }
}

#[async_trait]
impl<R> CreateNewsUseCase for NewsService<R>
where
    R: NewsRepository,
{
    async fn execute(&self, command: CreateNewsCommand) -> Result<News, NewsError> {
        let draft = command.input.into_draft()?;

        let photos = if command.photos.is_empty() {
            Vec::new()
        } else {
            self.uploader
                .upload_photos(MediaFolder::News, PHOTOS_FIELD, command.photos)
                .await?
        };

        let new = NewNews {
            author_id: command.author,
            draft,
            photos: photos.clone(),
        };

        match self.repo.insert(new).await {
            Ok(news) => {
                tracing::info!(news_id = %news.id, author = %news.author_id, "News created");
                Ok(news)
            }
            Err(e) => {
                self.uploader.discard(&photos).await;
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl<R> UpdateNewsUseCase for NewsService<R>
where
    R: NewsRepository,
{
    async fn execute(&self, command: UpdateNewsCommand) -> Result<News, NewsError> {
        let mut news = self.authored_news(command.caller, command.id).await?;
        let draft = command.input.into_draft()?;

        let uploaded = if command.photos.is_empty() {
            None
        } else {
            Some(
                self.uploader
                    .upload_photos(MediaFolder::News, PHOTOS_FIELD, command.photos)
                    .await?,
            )
        };

        draft.apply_to(&mut news);
        let replaced = match &uploaded {
            Some(photos) => std::mem::replace(&mut news.photos, photos.clone()),
            None => Vec::new(),
        };

        match self.repo.update(news).await {
            Ok(updated) => {
                self.uploader.discard(&replaced).await;
                Ok(updated)
            }
            Err(e) => {
                if let Some(photos) = &uploaded {
                    self.uploader.discard(photos).await;
                }
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl<R> DeleteNewsUseCase for NewsService<R>
where
    R: NewsRepository,
{
    async fn execute(&self, caller: Caller, id: Uuid) -> Result<(), NewsError> {
        let news = self.authored_news(caller, id).await?;

        if !self.repo.soft_delete(id).await? {
            return Err(NewsError::NotFound);
        }

        self.uploader.discard(&news.photos).await;
        tracing::info!(news_id = %id, by = %caller.user_id, "News deactivated");
        Ok(())
    }
}

#[async_trait]
impl<R> GetNewsUseCase for NewsService<R>
where
    R: NewsRepository,
{
    async fn execute(&self, id: Uuid) -> Result<News, NewsError> {
        self.repo.find_by_id(id).await?.ok_or(NewsError::NotFound)
    }
}
