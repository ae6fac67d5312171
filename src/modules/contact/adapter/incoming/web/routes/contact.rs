use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::contact::adapter::incoming::map_contact_error;
use crate::contact::application::domain::entities::ContactInput;
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "fan@example.com")]
    pub email: Option<String>,
    #[schema(example = "Booking question")]
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl From<ContactRequest> for ContactInput {
    fn from(req: ContactRequest) -> Self {
        ContactInput {
            email: req.email,
            subject: req.subject,
            message: req.message,
        }
    }
}

/// Leave a message for the site administrators
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored"),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    body: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let contact = data
        .contact
        .submit
        .execute(body.into_inner().into())
        .await
        .map_err(map_contact_error)?;

    Ok(ApiResponse::created(
        "Thank you for your message. We will get back to you soon!",
        json!({ "contact": contact }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Every message, newest first"),
        (status = 403, description = "Caller is not an admin", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/contact")]
pub async fn list_contacts_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    let contacts = data
        .contact
        .list
        .execute()
        .await
        .map_err(map_contact_error)?;

    Ok(ApiResponse::success(json!({ "contacts": contacts })))
}
