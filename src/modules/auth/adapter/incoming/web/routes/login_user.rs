use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use super::register_user::AuthResponse;
use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginRequest};
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

/// Login request from client
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "blues@example.com")]
    pub email: Option<String>,

    #[schema(example = "secret1")]
    pub password: Option<String>,
}

fn map_login_error(err: LoginError) -> AppError {
    match err {
        LoginError::InvalidCredentials => {
            warn!("Login failed: Invalid credentials");
            AppError::unauthenticated("Invalid email or password")
        }
        LoginError::PasswordVerificationFailed(e)
        | LoginError::TokenGenerationFailed(e)
        | LoginError::QueryError(e) => AppError::internal(e),
    }
}

/// User login
///
/// Authenticates with email and password and returns a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(crate::api::schemas::SuccessResponse<AuthResponse>)),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let dto = req.into_inner();
    let request = LoginRequest::new(dto.email, dto.password)?;

    info!(email = %request.email(), "Login attempt");

    let output = data
        .auth
        .login
        .execute(request)
        .await
        .map_err(map_login_error)?;

    info!(user_id = %output.user.id, "User logged in successfully");

    Ok(ApiResponse::success_with_message(
        "Login successful",
        AuthResponse {
            token: output.token,
            user: output.user,
        },
    ))
}
