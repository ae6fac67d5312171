use actix_web::{get, put, web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::profile::adapter::incoming::map_profile_error;
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

const NOT_FOUND: &str = "Journalist not found";

#[utoipa::path(
    get,
    path = "/api/journalists",
    tag = "journalists",
    responses((status = 200, description = "Active journalists, by full name"))
)]
#[get("/api/journalists")]
pub async fn list_journalists_handler(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let journalists = data
        .journalist
        .list
        .execute()
        .await
        .map_err(|e| map_profile_error(e, NOT_FOUND))?;

    Ok(ApiResponse::success(json!({ "journalists": journalists })))
}

#[utoipa::path(
    get,
    path = "/api/journalists/{id}",
    tag = "journalists",
    params(("id" = Uuid, Path, description = "Journalist id")),
    responses(
        (status = 200, description = "The journalist"),
        (status = 404, description = "Unknown journalist", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/journalists/{id}")]
pub async fn get_journalist_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let journalist = data
        .journalist
        .get
        .execute(path.into_inner())
        .await
        .map_err(|e| map_profile_error(e, NOT_FOUND))?;

    Ok(ApiResponse::success(json!({ "journalist": journalist })))
}

/// Mark a journalist and their account verified
#[utoipa::path(
    put,
    path = "/api/journalists/{id}/verify",
    tag = "journalists",
    params(("id" = Uuid, Path, description = "Journalist id")),
    responses(
        (status = 200, description = "Journalist verified"),
        (status = 403, description = "Caller is not an admin", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Unknown journalist", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/journalists/{id}/verify")]
pub async fn verify_journalist_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    let journalist = data
        .journalist
        .verify
        .execute(path.into_inner())
        .await
        .map_err(|e| map_profile_error(e, NOT_FOUND))?;

    Ok(ApiResponse::success_with_message(
        "Journalist verified successfully",
        json!({ "journalist": journalist }),
    ))
}
