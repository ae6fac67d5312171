use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::profile::adapter::incoming::map_profile_error;
use crate::shared::api::{ApiResponse, AppError};
use crate::shared::domain::City;
use crate::venue::application::domain::entities::{ShowInput, INVALID_CITY_MESSAGE};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddShowRequest {
    #[schema(example = "Kermit Ruffins")]
    pub artist: Option<String>,
    /// ISO date
    #[schema(example = "2025-06-14")]
    pub date: Option<String>,
    #[schema(example = "9pm")]
    pub time: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CalendarQuery {
    pub city: Option<String>,
}

/// Append a show to the caller's venue calendar
#[utoipa::path(
    post,
    path = "/api/venues/add-show",
    tag = "venues",
    request_body = AddShowRequest,
    responses(
        (status = 200, description = "Show added"),
        (status = 404, description = "Caller has no venue", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/venues/add-show")]
pub async fn add_show_handler(
    user: AuthenticatedUser,
    body: web::Json<AddShowRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Venue])?;

    let req = body.into_inner();
    let venue = data
        .venue
        .add_show
        .execute(
            user.user_id,
            ShowInput {
                artist: req.artist,
                date: req.date,
                time: req.time,
            },
        )
        .await
        .map_err(|e| map_profile_error(e, "Venue not found"))?;

    Ok(ApiResponse::success_with_message(
        "Show added successfully",
        json!({ "venue": venue }),
    ))
}

/// Venues of one city with their colour and shows
#[utoipa::path(
    get,
    path = "/api/venues/calendar",
    tag = "venues",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Calendar entries"),
        (status = 400, description = "Missing or unknown city", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/venues/calendar")]
pub async fn venue_calendar_handler(
    query: web::Query<CalendarQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let raw = query
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::invalid("city", "City is required"))?;
    let city = City::parse(raw).ok_or_else(|| AppError::invalid("city", INVALID_CITY_MESSAGE))?;

    let venues = data
        .venue
        .calendar
        .execute(city)
        .await
        .map_err(|e| map_profile_error(e, "Venue not found"))?;

    Ok(ApiResponse::success(json!({ "venues": venues })))
}
