use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::news::adapter::incoming::map_news_error;
use crate::news::application::{
    domain::entities::NewsInput,
    ports::incoming::{CreateNewsCommand, NewsError, UpdateNewsCommand},
};
use crate::shared::api::{text_value, ApiResponse, AppError, JsonOrMultipart};
use crate::storage::adapter::incoming::read_uploads;
use crate::storage::application::domain::entities::FileUpload;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct NewsRequest {
    #[schema(example = "Jazz Fest lineup announced")]
    pub title: Option<String>,
    pub description: Option<String>,
    /// new orleans, biloxi, mobile or pensacola
    #[schema(example = "new orleans")]
    pub location: Option<String>,
    #[schema(example = "Photo: J. Boudreaux")]
    pub credit: Option<String>,
}

#[derive(MultipartForm)]
pub struct NewsForm {
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub location: Option<Text<String>>,
    pub credit: Option<Text<String>>,
    pub photos: Vec<TempFile>,
}

pub type NewsBody = JsonOrMultipart<NewsRequest, NewsForm>;

async fn read_body(body: NewsBody) -> Result<(NewsInput, Vec<FileUpload>), AppError> {
    match body {
        JsonOrMultipart::Json(req) => Ok((
            NewsInput {
                title: req.title,
                description: req.description,
                location: req.location,
                credit: req.credit,
            },
            Vec::new(),
        )),
        JsonOrMultipart::Multipart(form) => Ok((
            NewsInput {
                title: text_value(form.title),
                description: text_value(form.description),
                location: text_value(form.location),
                credit: text_value(form.credit),
            },
            read_uploads(form.photos).await?,
        )),
    }
}

/// Publish a story with up to five photos
#[utoipa::path(
    post,
    path = "/api/news",
    tag = "news",
    request_body = NewsRequest,
    responses(
        (status = 201, description = "News created"),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/news")]
pub async fn create_news_handler(
    user: AuthenticatedUser,
    body: NewsBody,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Journalist])?;

    let (input, photos) = read_body(body).await?;
    let news = data
        .news
        .create
        .execute(CreateNewsCommand {
            author: user.user_id,
            input,
            photos,
        })
        .await
        .map_err(map_news_error)?;

    Ok(ApiResponse::created(
        "News created successfully",
        json!({ "news": news }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = "news",
    params(("id" = Uuid, Path, description = "News id")),
    responses(
        (status = 200, description = "The story with its author"),
        (status = 404, description = "Unknown story", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/news/{id}")]
pub async fn get_news_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let news = data
        .news
        .get
        .execute(path.into_inner())
        .await
        .map_err(map_news_error)?;

    Ok(ApiResponse::success(json!({ "news": news })))
}

/// Replace a story's fields; photos change only when new ones are uploaded
#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = "news",
    params(("id" = Uuid, Path, description = "News id")),
    request_body = NewsRequest,
    responses(
        (status = 200, description = "News updated"),
        (status = 403, description = "Caller is not the author", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Unknown story", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/news/{id}")]
pub async fn update_news_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: NewsBody,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Journalist])?;

    let (input, photos) = read_body(body).await?;
    let news = data
        .news
        .update
        .execute(UpdateNewsCommand {
            caller: user.caller(),
            id: path.into_inner(),
            input,
            photos,
        })
        .await
        .map_err(map_news_error)?;

    Ok(ApiResponse::success_with_message(
        "News updated successfully",
        json!({ "news": news }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = "news",
    params(("id" = Uuid, Path, description = "News id")),
    responses(
        (status = 200, description = "News deactivated"),
        (status = 403, description = "Caller is not the author", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Unknown story", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/news/{id}")]
pub async fn delete_news_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Journalist])?;

    data.news
        .delete
        .execute(user.caller(), path.into_inner())
        .await
        .map_err(|e| match e {
            NewsError::NotAuthor => AppError::forbidden("Not authorized to delete this news"),
            other => map_news_error(other),
        })?;

    Ok(ApiResponse::message("News deleted successfully"))
}
