use crate::news::application::ports::incoming::NewsError;
use crate::shared::api::AppError;
use crate::storage::adapter::incoming::map_upload_error;

pub const NEWS_NOT_FOUND: &str = "News not found";

pub fn map_news_error(err: NewsError) -> AppError {
    match err {
        NewsError::NotFound => AppError::not_found(NEWS_NOT_FOUND),
        NewsError::NotAuthor => AppError::forbidden("Not authorized to update this news"),
        NewsError::Invalid(errors) => errors.into(),
        NewsError::Upload(e) => map_upload_error(e),
        NewsError::Database(detail) => AppError::internal(detail),
    }
}
