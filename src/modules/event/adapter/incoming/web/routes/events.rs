use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::event::adapter::incoming::map_event_error;
use crate::event::application::{domain::entities::EventInput, ports::incoming::EventError};
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

const CREATE_VENUE_FIRST: &str = "Venue profile not found. Please create your venue profile first.";

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[schema(example = "Tank and the Bangas")]
    pub artist_band_name: Option<String>,
    #[schema(example = "8:00 PM")]
    pub time: Option<String>,
    /// ISO date, today or later
    #[schema(example = "2030-05-02")]
    pub date: Option<String>,
    pub description: Option<String>,
}

impl From<EventRequest> for EventInput {
    fn from(req: EventRequest) -> Self {
        EventInput {
            artist_band_name: req.artist_band_name,
            time: req.time,
            date: req.date,
            description: req.description,
        }
    }
}

/// Create an event at the caller's venue
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "events",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Event created"),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Caller has no venue profile", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/events")]
pub async fn create_event_handler(
    user: AuthenticatedUser,
    body: web::Json<EventRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Venue])?;

    let event = data
        .event
        .create
        .execute(user.user_id, body.into_inner().into())
        .await
        .map_err(|e| match e {
            EventError::VenueProfileMissing => AppError::not_found(CREATE_VENUE_FIRST),
            other => map_event_error(other),
        })?;

    Ok(ApiResponse::created(
        "Event created successfully",
        json!({ "event": event }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event with its venue"),
        (status = 404, description = "Unknown event", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/events/{id}")]
pub async fn get_event_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let event = data
        .event
        .get
        .execute(path.into_inner())
        .await
        .map_err(map_event_error)?;

    Ok(ApiResponse::success(json!({ "event": event })))
}

/// Partially update an event; city and colour stay as assigned
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = EventRequest,
    responses(
        (status = 200, description = "Event updated"),
        (status = 403, description = "Caller does not host the event", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Unknown event", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/events/{id}")]
pub async fn update_event_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<EventRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Venue])?;

    let event = data
        .event
        .update
        .execute(user.caller(), path.into_inner(), body.into_inner().into())
        .await
        .map_err(map_event_error)?;

    Ok(ApiResponse::success_with_message(
        "Event updated successfully",
        json!({ "event": event }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deactivated"),
        (status = 403, description = "Caller does not host the event", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Unknown event", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/events/{id}")]
pub async fn delete_event_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Venue])?;

    data.event
        .delete
        .execute(user.caller(), path.into_inner())
        .await
        .map_err(|e| match e {
            EventError::NotOwner => AppError::forbidden("Not authorized to delete this event"),
            other => map_event_error(other),
        })?;

    Ok(ApiResponse::message("Event deleted successfully"))
}
