use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::{Role, UserId};
use crate::profile::adapter::incoming::{map_profile_error, saved_response};
use crate::profile::application::services::SaveMode;
use crate::shared::api::{string_or_number, text_value, ApiResponse, AppError, JsonOrMultipart};
use crate::storage::adapter::incoming::read_uploads;
use crate::venue::application::{
    domain::entities::VenueProfileInput, ports::incoming::SaveVenueProfileCommand,
};
use crate::AppState;

pub const PROFILE_NOT_FOUND: &str = "Venue profile not found";

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VenueProfileRequest {
    #[schema(example = "Tipitina's")]
    pub venue_name: Option<String>,
    /// new orleans, biloxi, mobile or pensacola
    #[schema(example = "new orleans")]
    pub city: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    #[schema(value_type = Option<u32>, example = 800)]
    pub seating_capacity: Option<String>,
    pub biography: Option<String>,
    #[schema(example = "8pm - 2am")]
    pub open_hours: Option<String>,
    #[schema(example = "Wed - Sun")]
    pub open_days: Option<String>,
}

impl From<VenueProfileRequest> for VenueProfileInput {
    fn from(req: VenueProfileRequest) -> Self {
        Self {
            venue_name: req.venue_name,
            city: req.city,
            address: req.address,
            seating_capacity: req.seating_capacity,
            biography: req.biography,
            open_hours: req.open_hours,
            open_days: req.open_days,
        }
    }
}

#[derive(MultipartForm)]
pub struct VenueProfileForm {
    #[multipart(rename = "venueName")]
    pub venue_name: Option<Text<String>>,
    pub city: Option<Text<String>>,
    pub address: Option<Text<String>>,
    #[multipart(rename = "seatingCapacity")]
    pub seating_capacity: Option<Text<String>>,
    pub biography: Option<Text<String>>,
    #[multipart(rename = "openHours")]
    pub open_hours: Option<Text<String>>,
    #[multipart(rename = "openDays")]
    pub open_days: Option<Text<String>>,
    pub photos: Vec<TempFile>,
}

pub type VenueProfileBody = JsonOrMultipart<VenueProfileRequest, VenueProfileForm>;

async fn into_command(owner: UserId, body: VenueProfileBody) -> Result<SaveVenueProfileCommand, AppError> {
    match body {
        JsonOrMultipart::Json(req) => Ok(SaveVenueProfileCommand {
            owner,
            input: req.into(),
            photos: Vec::new(),
        }),
        JsonOrMultipart::Multipart(form) => Ok(SaveVenueProfileCommand {
            owner,
            input: VenueProfileInput {
                venue_name: text_value(form.venue_name),
                city: text_value(form.city),
                address: text_value(form.address),
                seating_capacity: text_value(form.seating_capacity),
                biography: text_value(form.biography),
                open_hours: text_value(form.open_hours),
                open_days: text_value(form.open_days),
            },
            photos: read_uploads(form.photos).await?,
        }),
    }
}

async fn save(
    user: AuthenticatedUser,
    body: VenueProfileBody,
    data: web::Data<AppState>,
    mode: SaveMode,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Venue])?;

    let command = into_command(user.user_id, body).await?;
    let saved = data
        .venue
        .save
        .execute(command, mode)
        .await
        .map_err(|e| map_profile_error(e, PROFILE_NOT_FOUND))?;

    Ok(saved_response(
        saved.map(|venue| json!({ "venue": venue })),
        "Venue profile saved successfully",
        "Venue profile updated successfully",
    ))
}

/// Create the caller's venue (assigning its registration order and colour) or merge into it
#[utoipa::path(
    post,
    path = "/api/venues/profile",
    tag = "venues",
    request_body = VenueProfileRequest,
    responses(
        (status = 201, description = "Venue created"),
        (status = 200, description = "Existing venue updated"),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
        (status = 409, description = "Registration order contended", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/venues/profile")]
pub async fn upsert_venue_profile_handler(
    user: AuthenticatedUser,
    body: VenueProfileBody,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    save(user, body, data, SaveMode::Upsert).await
}

#[utoipa::path(
    put,
    path = "/api/venues/profile",
    tag = "venues",
    request_body = VenueProfileRequest,
    responses(
        (status = 200, description = "Venue updated"),
        (status = 404, description = "No venue yet", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/venues/profile")]
pub async fn update_venue_profile_handler(
    user: AuthenticatedUser,
    body: VenueProfileBody,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    save(user, body, data, SaveMode::UpdateExisting).await
}

#[get("/api/venues/profile")]
pub async fn get_my_venue_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Venue])?;

    let venue = data
        .venue
        .my_profile
        .execute(user.user_id)
        .await
        .map_err(|e| map_profile_error(e, PROFILE_NOT_FOUND))?;

    Ok(ApiResponse::success(json!({ "venue": venue })))
}

#[delete("/api/venues/profile")]
pub async fn delete_venue_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Venue])?;

    data.venue
        .delete
        .execute(user.user_id)
        .await
        .map_err(|e| map_profile_error(e, PROFILE_NOT_FOUND))?;

    Ok(ApiResponse::message("Venue profile deleted successfully"))
}
