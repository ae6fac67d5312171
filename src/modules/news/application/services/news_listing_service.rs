use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::news::application::{
    domain::entities::{LocationFilter, News},
    ports::{
        incoming::{ListNewsUseCase, MyNewsUseCase, NewsError},
        outgoing::NewsQuery,
    },
};

pub struct NewsListingService<Q>
where
    Q: NewsQuery,
{
    query: Q,
}

impl<Q> NewsListingService<Q>
where
    Q: NewsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListNewsUseCase for NewsListingService<Q>
where
    Q: NewsQuery,
{
    async fn execute(&self, filter: LocationFilter) -> Result<Vec<News>, NewsError> {
        let location = match filter {
            LocationFilter::Any => None,
            LocationFilter::City(city) => Some(city),
            LocationFilter::Unmatched => return Ok(Vec::new()),
        };

        Ok(self.query.list_active(location).await?)
    }
}

#[async_trait]
impl<Q> MyNewsUseCase for NewsListingService<Q>
where
    Q: NewsQuery,
{
    async fn execute(&self, author: UserId) -> Result<Vec<News>, NewsError> {
        Ok(self.query.by_author(author).await?)
    }
}
