use actix_web::{get, web, HttpResponse};

use crate::auth::{
    adapter::incoming::web::extractors::auth::AuthenticatedUser,
    application::ports::incoming::use_cases::FetchUserError,
};
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

#[get("/api/auth/me")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = data
        .auth
        .current_user
        .execute(user.user_id)
        .await
        .map_err(|e| match e {
            FetchUserError::NotFound => AppError::not_found("User not found"),
            FetchUserError::QueryError(detail) => AppError::internal(detail),
        })?;

    Ok(ApiResponse::success(view))
}
