use actix_web::{get, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::admin::adapter::incoming::map_admin_error;
use crate::admin::application::domain::entities::{ContentKind, INVALID_CONTENT_TYPE_MESSAGE};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::shared::api::{ApiResponse, AppError};
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ContentQuery {
    /// `artists`, `venues`, `news` or `events`
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    /// Omit to flip the current state
    pub is_active: Option<bool>,
}

impl ToggleRequest {
    /// An empty body flips the state; anything else must be a valid request.
    fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| AppError::invalid("isActive", &e.to_string()))
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/content",
    tag = "admin",
    params(ContentQuery),
    responses(
        (status = 200, description = "Active content of one kind, newest first"),
        (status = 400, description = "Invalid content type", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/content")]
pub async fn list_content_handler(
    user: AuthenticatedUser,
    query: web::Query<ContentQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    let kind = query
        .content_type
        .as_deref()
        .and_then(ContentKind::parse_collection)
        .ok_or_else(|| AppError::invalid("type", INVALID_CONTENT_TYPE_MESSAGE))?;

    let list = data
        .admin
        .list_content
        .execute(kind, PageRequest::new(query.page, query.limit))
        .await
        .map_err(map_admin_error)?;

    Ok(ApiResponse::success(list))
}

#[utoipa::path(
    put,
    path = "/api/admin/content/{kind}/{id}/toggle",
    tag = "admin",
    params(
        ("kind" = String, Path, description = "`artist`, `venue`, `news` or `event`"),
        ("id" = Uuid, Path, description = "Content id"),
    ),
    request_body(content = ToggleRequest, description = "Optional; an empty body flips the state"),
    responses(
        (status = 200, description = "Content status changed"),
        (status = 400, description = "Invalid content type", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Unknown content", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/admin/content/{kind}/{id}/toggle")]
pub async fn toggle_content_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, Uuid)>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Admin])?;

    let (kind, id) = path.into_inner();
    let kind = ContentKind::parse_item(&kind)
        .ok_or_else(|| AppError::invalid("type", INVALID_CONTENT_TYPE_MESSAGE))?;
    let requested = ToggleRequest::from_body(&body)?.is_active;

    let entry = data
        .admin
        .toggle_content
        .execute(kind, id, requested)
        .await
        .map_err(map_admin_error)?;

    let message = if entry.content.is_active() {
        "Content activated successfully"
    } else {
        "Content deactivated successfully"
    };

    Ok(ApiResponse::success_with_message(
        message,
        json!({ "content": entry }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::application::{
        domain::entities::{ContentEntry, ContentItem},
        ports::incoming::{AdminError, ContentList, ListContentUseCase, ToggleContentUseCase},
    };
    use crate::auth::application::domain::entities::UserId;
    use crate::news::application::domain::entities::fixtures::news;
    use crate::shared::domain::City;
    use crate::shared::pagination::PageInfo;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, stub_token_provider};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockContent {
        seen: Arc<Mutex<Vec<ContentKind>>>,
    }

    #[async_trait]
    impl ListContentUseCase for MockContent {
        async fn execute(&self, kind: ContentKind, page: PageRequest) -> Result<ContentList, AdminError> {
            self.seen.lock().unwrap().push(kind);
            Ok(ContentList {
                content: vec![],
                pagination: PageInfo::new(page, 0),
            })
        }
    }

    #[derive(Default)]
    struct MockToggle {
        seen: Arc<Mutex<Option<(ContentKind, Option<bool>)>>>,
    }

    #[async_trait]
    impl ToggleContentUseCase for MockToggle {
        async fn execute(
            &self,
            kind: ContentKind,
            id: Uuid,
            active: Option<bool>,
        ) -> Result<ContentEntry, AdminError> {
            *self.seen.lock().unwrap() = Some((kind, active));
            let mut story = news(UserId::from(Uuid::new_v4()), City::Mobile);
            story.id = id;
            story.is_active = active.unwrap_or(false);
            Ok(ContentEntry::new(ContentItem::News(story)))
        }
    }

    struct MissingToggle;

    #[async_trait]
    impl ToggleContentUseCase for MissingToggle {
        async fn execute(
            &self,
            _kind: ContentKind,
            _id: Uuid,
            _active: Option<bool>,
        ) -> Result<ContentEntry, AdminError> {
            Err(AdminError::ContentNotFound)
        }
    }

    #[actix_web::test]
    async fn test_list_content_parses_type() {
        let user_id = Uuid::new_v4();
        let mock = MockContent::default();
        let seen = mock.seen.clone();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Admin)
            .with_admin(|uc| uc.list_content = Arc::new(mock))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(list_content_handler),
        )
        .await;

        for (uri, status) in [
            ("/api/admin/content?type=venues", StatusCode::OK),
            ("/api/admin/content?type=events&page=2", StatusCode::OK),
            ("/api/admin/content?type=comments", StatusCode::BAD_REQUEST),
            ("/api/admin/content", StatusCode::BAD_REQUEST),
        ] {
            let req = test::TestRequest::get()
                .uri(uri)
                .insert_header(bearer(user_id))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), status, "{uri}");
        }

        assert_eq!(*seen.lock().unwrap(), vec![ContentKind::Venue, ContentKind::Event]);
    }

    #[actix_web::test]
    async fn test_toggle_without_body_flips() {
        // Arrange
        let user_id = Uuid::new_v4();
        let mock = MockToggle::default();
        let seen = mock.seen.clone();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Admin)
            .with_admin(|uc| uc.toggle_content = Arc::new(mock))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(toggle_content_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/content/news/{}/toggle", Uuid::new_v4()))
            .insert_header(bearer(user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*seen.lock().unwrap(), Some((ContentKind::News, None)));
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Content deactivated successfully");
    }

    #[actix_web::test]
    async fn test_toggle_with_explicit_state() {
        let user_id = Uuid::new_v4();
        let mock = MockToggle::default();
        let seen = mock.seen.clone();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Admin)
            .with_admin(|uc| uc.toggle_content = Arc::new(mock))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(toggle_content_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/content/event/{}/toggle", Uuid::new_v4()))
            .insert_header(bearer(user_id))
            .set_json(json!({ "isActive": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*seen.lock().unwrap(), Some((ContentKind::Event, Some(true))));
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Content activated successfully");
    }

    #[actix_web::test]
    async fn test_toggle_rejects_malformed_body() {
        let user_id = Uuid::new_v4();
        let mock = MockToggle::default();
        let seen = mock.seen.clone();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Admin)
            .with_admin(|uc| uc.toggle_content = Arc::new(mock))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(toggle_content_handler),
        )
        .await;

        for payload in [r#"{"isActive":"false"}"#, "{isActive: false"] {
            let req = test::TestRequest::put()
                .uri(&format!("/api/admin/content/venue/{}/toggle", Uuid::new_v4()))
                .insert_header(bearer(user_id))
                .insert_header(("Content-Type", "application/json"))
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["errors"][0]["field"], "isActive");
        }

        assert_eq!(*seen.lock().unwrap(), None);
    }

    #[actix_web::test]
    async fn test_toggle_rejects_unknown_kind() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Admin)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(toggle_content_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/content/comment/{}/toggle", Uuid::new_v4()))
            .insert_header(bearer(user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid content type");
    }

    #[actix_web::test]
    async fn test_toggle_unknown_content() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Admin)
            .with_admin(|uc| uc.toggle_content = Arc::new(MissingToggle))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(toggle_content_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/content/artist/{}/toggle", Uuid::new_v4()))
            .insert_header(bearer(user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Content not found");
    }
}
