use actix_web::{delete, get, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::admin::adapter::incoming::map_admin_error;
use crate::admin::application::domain::entities::UserFilter;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::shared::api::{ApiResponse, AppError};
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// A role, or `all`
    #[serde(alias = "userType")]
    pub role: Option<String>,
    /// Case-insensitive match on username or email
    pub search: Option<String>,
    pub verified: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    params(UserListQuery),
    responses(
        (status = 200, description = "One page of accounts, newest first"),
        (status = 400, description = "Unknown role", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/users")]
pub async fn list_users_handler(
    user: AuthenticatedUser,
    query: web::Query<UserListQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    let filter = UserFilter::from_query(
        query.role.as_deref(),
        query.verified,
        query.search.as_deref(),
        PageRequest::new(query.page, query.limit),
    )?;

    let list = data
        .admin
        .list_users
        .execute(filter)
        .await
        .map_err(map_admin_error)?;

    Ok(ApiResponse::success(list))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/verify",
    tag = "admin",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User verified"),
        (status = 404, description = "Unknown user", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/admin/users/{id}/verify")]
pub async fn verify_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    let verified = data
        .admin
        .verify_user
        .execute(path.into_inner())
        .await
        .map_err(map_admin_error)?;

    Ok(ApiResponse::success_with_message(
        "User verified successfully",
        json!({ "user": verified }),
    ))
}

/// Deactivates the account and any artist or venue profile it owns
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deactivated"),
        (status = 404, description = "Unknown user", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/admin/users/{id}")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    data.admin
        .delete_user
        .execute(path.into_inner())
        .await
        .map_err(map_admin_error)?;

    Ok(ApiResponse::message("User deleted successfully"))
}
