use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::{Role, UserId};
use crate::journalist::application::{
    domain::entities::{CoverageInput, JournalistProfileInput},
    ports::incoming::SaveJournalistProfileCommand,
};
use crate::profile::adapter::incoming::{map_profile_error, saved_response};
use crate::profile::application::services::SaveMode;
use crate::shared::api::{text_value, ApiResponse, AppError, JsonOrMultipart};
use crate::storage::adapter::incoming::read_upload;
use crate::AppState;

pub const PROFILE_NOT_FOUND: &str = "Journalist profile not found";

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalistProfileRequest {
    #[schema(example = "Keith Spera")]
    pub full_name: Option<String>,
    pub bio: Option<String>,
    /// City names, `regional` or `national`
    #[schema(value_type = Option<Vec<String>>)]
    pub areas_of_coverage: Option<CoverageInput>,
}

/// Multipart variant; `areasOfCoverage` is sent as JSON-array text.
#[derive(MultipartForm)]
pub struct JournalistProfileForm {
    #[multipart(rename = "fullName")]
    pub full_name: Option<Text<String>>,
    pub bio: Option<Text<String>>,
    #[multipart(rename = "areasOfCoverage")]
    pub areas_of_coverage: Option<Text<String>>,
    #[multipart(rename = "profilePhoto")]
    pub profile_photo: Option<TempFile>,
}

pub type JournalistProfileBody = JsonOrMultipart<JournalistProfileRequest, JournalistProfileForm>;

async fn into_command(
    owner: UserId,
    body: JournalistProfileBody,
) -> Result<SaveJournalistProfileCommand, AppError> {
    match body {
        JsonOrMultipart::Json(req) => Ok(SaveJournalistProfileCommand {
            owner,
            input: JournalistProfileInput {
                full_name: req.full_name,
                bio: req.bio,
                areas_of_coverage: req.areas_of_coverage,
            },
            profile_photo: None,
        }),
        JsonOrMultipart::Multipart(form) => {
            let profile_photo = match form.profile_photo {
                Some(file) => Some(read_upload(file).await?),
                None => None,
            };

            Ok(SaveJournalistProfileCommand {
                owner,
                input: JournalistProfileInput {
                    full_name: text_value(form.full_name),
                    bio: text_value(form.bio),
                    areas_of_coverage: text_value(form.areas_of_coverage).map(CoverageInput::Encoded),
                },
                profile_photo,
            })
        }
    }
}

async fn save(
    user: AuthenticatedUser,
    body: JournalistProfileBody,
    data: web::Data<AppState>,
    mode: SaveMode,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Journalist])?;

    let command = into_command(user.user_id, body).await?;
    let saved = data
        .journalist
        .save
        .execute(command, mode)
        .await
        .map_err(|e| map_profile_error(e, PROFILE_NOT_FOUND))?;

    Ok(saved_response(
        saved.map(|journalist| json!({ "journalist": journalist })),
        "Journalist profile saved successfully",
        "Journalist profile updated successfully",
    ))
}

/// Create the caller's journalist profile, or merge into it when it exists
#[utoipa::path(
    post,
    path = "/api/journalists/profile",
    tag = "journalists",
    request_body = JournalistProfileRequest,
    responses(
        (status = 201, description = "Profile created"),
        (status = 200, description = "Existing profile updated"),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/journalists/profile")]
pub async fn upsert_journalist_profile_handler(
    user: AuthenticatedUser,
    body: JournalistProfileBody,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    save(user, body, data, SaveMode::Upsert).await
}

#[utoipa::path(
    put,
    path = "/api/journalists/profile",
    tag = "journalists",
    request_body = JournalistProfileRequest,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 404, description = "No profile yet", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/journalists/profile")]
pub async fn update_journalist_profile_handler(
    user: AuthenticatedUser,
    body: JournalistProfileBody,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    save(user, body, data, SaveMode::UpdateExisting).await
}

#[get("/api/journalists/profile")]
pub async fn get_my_journalist_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Journalist])?;

    let journalist = data
        .journalist
        .my_profile
        .execute(user.user_id)
        .await
        .map_err(|e| map_profile_error(e, PROFILE_NOT_FOUND))?;

    Ok(ApiResponse::success(json!({ "journalist": journalist })))
}

#[delete("/api/journalists/profile")]
pub async fn delete_journalist_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Journalist])?;

    data.journalist
        .delete
        .execute(user.user_id)
        .await
        .map_err(|e| map_profile_error(e, PROFILE_NOT_FOUND))?;

    Ok(ApiResponse::message("Journalist profile deleted successfully"))
}
