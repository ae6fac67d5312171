use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::event::adapter::incoming::map_event_error;
use crate::shared::api::{ApiResponse, AppError};
use crate::shared::domain::{City, CityFilter};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EventListQuery {
    /// Unknown or missing cities fall back to mobile
    pub city: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct UpcomingQuery {
    /// Defaults to 10, capped at 100
    pub limit: Option<i64>,
}

/// Active events of one city with the filter that produced them
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    params(EventListQuery),
    responses((status = 200, description = "Events by date then time, plus the applied filter"))
)]
#[get("/api/events")]
pub async fn list_events_handler(
    query: web::Query<EventListQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let city = CityFilter::resolve(query.city.as_deref());

    let events = data
        .event
        .list
        .execute(city)
        .await
        .map_err(map_event_error)?;

    Ok(ApiResponse::success(json!({
        "events": events,
        "filters": {
            "currentCity": city.as_str(),
            "availableCities": City::all_names(),
        },
    })))
}

#[utoipa::path(
    get,
    path = "/api/events/upcoming",
    tag = "events",
    params(UpcomingQuery),
    responses((status = 200, description = "Active events from today on"))
)]
#[get("/api/events/upcoming")]
pub async fn upcoming_events_handler(
    query: web::Query<UpcomingQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    // Zero and negative limits fall back to the default.
    let limit = query.limit.map_or(0, |l| l.max(0) as u64);

    let events = data
        .event
        .upcoming
        .execute(limit)
        .await
        .map_err(map_event_error)?;

    Ok(ApiResponse::success(json!({ "events": events })))
}

/// Every event of the caller's venue, including deactivated ones
#[utoipa::path(
    get,
    path = "/api/events/venue/my-events",
    tag = "events",
    responses(
        (status = 200, description = "The caller's events, newest date first"),
        (status = 404, description = "Caller has no venue profile", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/events/venue/my-events")]
pub async fn my_events_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Venue])?;

    let events = data
        .event
        .my_events
        .execute(user.user_id)
        .await
        .map_err(map_event_error)?;

    Ok(ApiResponse::success(json!({ "events": events })))
}
