use actix_web::{delete, get, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::contact::adapter::incoming::map_contact_error;
use crate::contact::application::ports::incoming::MailboxFilter;
use crate::shared::api::{ApiResponse, AppError};
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MailboxQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// Only read (`true`) or unread (`false`) messages
    pub read: Option<bool>,
}

impl From<&MailboxQuery> for MailboxFilter {
    fn from(query: &MailboxQuery) -> Self {
        MailboxFilter {
            read: query.read,
            page: PageRequest::new(query.page, query.limit),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    tag = "admin",
    params(MailboxQuery),
    responses((status = 200, description = "One page of messages with the unread count")),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/contacts")]
pub async fn mailbox_handler(
    user: AuthenticatedUser,
    query: web::Query<MailboxQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    let mailbox = data
        .contact
        .mailbox
        .execute(MailboxFilter::from(&*query))
        .await
        .map_err(map_contact_error)?;

    Ok(ApiResponse::success(mailbox))
}

#[utoipa::path(
    put,
    path = "/api/admin/contacts/{id}/read",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Contact message id")),
    responses(
        (status = 200, description = "Message marked as read"),
        (status = 404, description = "Unknown message", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/admin/contacts/{id}/read")]
pub async fn mark_contact_read_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    let contact = data
        .contact
        .mark_read
        .execute(path.into_inner())
        .await
        .map_err(map_contact_error)?;

    Ok(ApiResponse::success_with_message(
        "Contact marked as read",
        json!({ "contact": contact }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/contacts/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Contact message id")),
    responses(
        (status = 200, description = "Message deleted"),
        (status = 404, description = "Unknown message", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/admin/contacts/{id}")]
pub async fn delete_contact_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    data.contact
        .delete
        .execute(path.into_inner())
        .await
        .map_err(map_contact_error)?;

    Ok(ApiResponse::message("Contact message deleted successfully"))
}
