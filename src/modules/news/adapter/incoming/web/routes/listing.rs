use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::news::adapter::incoming::map_news_error;
use crate::news::application::domain::entities::LocationFilter;
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct NewsListQuery {
    /// A city, or `all`
    pub location: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/news",
    tag = "news",
    params(NewsListQuery),
    responses((status = 200, description = "Active stories, newest first"))
)]
#[get("/api/news")]
pub async fn list_news_handler(
    query: web::Query<NewsListQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filter = LocationFilter::parse(query.location.as_deref());

    let news = data
        .news
        .list
        .execute(filter)
        .await
        .map_err(map_news_error)?;

    Ok(ApiResponse::success(json!({ "news": news })))
}

#[utoipa::path(
    get,
    path = "/api/news/my-news",
    tag = "news",
    responses((status = 200, description = "The caller's active stories")),
    security(("BearerAuth" = []))
)]
#[get("/api/news/my-news")]
pub async fn my_news_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Journalist])?;

    let news = data
        .news
        .my_news
        .execute(user.user_id)
        .await
        .map_err(map_news_error)?;

    Ok(ApiResponse::success(json!({ "news": news })))
}
