use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::auth::application::{
    domain::entities::UserView,
    ports::incoming::use_cases::{
        CreateUserError, RegisterUserCommand, RegisterUserInput, RegistrationError,
    },
};
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────

/// Request body for user registration
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[schema(example = "bayou_blues")]
    pub username: Option<String>,

    #[schema(example = "blues@example.com")]
    pub email: Option<String>,

    /// Minimum 6 characters
    #[schema(example = "secret1")]
    pub password: Option<String>,

    /// fan, artist, venue or journalist
    #[serde(alias = "userType")]
    #[schema(example = "artist")]
    pub role: Option<String>,

    /// Required for artists
    #[schema(example = "jazz")]
    pub genre: Option<String>,

    /// Required for venues and journalists
    #[serde(alias = "location")]
    #[schema(example = "mobile")]
    pub home_city: Option<String>,
}

impl From<RegisterUserRequest> for RegisterUserInput {
    fn from(dto: RegisterUserRequest) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            role: dto.role,
            genre: dto.genre,
            home_city: dto.home_city,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    #[schema(value_type = Object)]
    pub user: UserView,
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_registration_error(err: RegistrationError) -> AppError {
    match err {
        RegistrationError::CreateUser(CreateUserError::EmailTaken) => {
            AppError::conflict("User already exists with this email")
        }
        RegistrationError::CreateUser(CreateUserError::UsernameTaken) => {
            AppError::conflict("Username is already taken")
        }
        RegistrationError::CreateUser(other) => AppError::internal(other),
        RegistrationError::VerificationEmailFailed(detail) => AppError::upstream(
            "Registration failed: verification email could not be sent",
            detail,
        ),
        RegistrationError::TokenGenerationFailed(detail) => AppError::internal(detail),
    }
}

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Register a new account
///
/// Artists, venues and journalists also receive an email explaining how to request
/// verification. If that email cannot be sent the account is not kept.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created", body = inline(crate::api::schemas::SuccessResponse<AuthResponse>)),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
        (status = 409, description = "Email or username taken", body = crate::api::schemas::ErrorResponse),
        (status = 502, description = "Verification email could not be sent", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let command = RegisterUserCommand::new(req.into_inner().into())?;

    info!(
        username = %command.username(),
        role = %command.role(),
        "User registration attempt"
    );

    let output = data
        .auth
        .register
        .register(command)
        .await
        .map_err(|e| {
            warn!(error = %e, "User registration failed");
            map_registration_error(e)
        })?;

    Ok(ApiResponse::created(
        &output.message,
        AuthResponse {
            token: output.token,
            user: output.user,
        },
    ))
}
