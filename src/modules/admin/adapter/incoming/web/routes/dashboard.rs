use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::admin::adapter::incoming::map_admin_error;
use crate::admin::application::domain::entities::SiteSettings;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "admin",
    responses(
        (status = 200, description = "Site totals, users per role, newest users and next events"),
        (status = 403, description = "Caller is not an admin", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/dashboard")]
pub async fn dashboard_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    let dashboard = data
        .admin
        .dashboard
        .execute()
        .await
        .map_err(map_admin_error)?;

    Ok(ApiResponse::success(dashboard))
}

#[utoipa::path(
    get,
    path = "/api/admin/settings",
    tag = "admin",
    responses((status = 200, description = "Site settings")),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/settings")]
pub async fn settings_handler(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    Ok(ApiResponse::success(json!({ "settings": SiteSettings::default() })))
}
