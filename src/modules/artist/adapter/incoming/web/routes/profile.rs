use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::artist::application::{
    domain::entities::ArtistProfileInput, ports::incoming::SaveArtistProfileCommand,
};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::{Role, UserId};
use crate::profile::adapter::incoming::{map_profile_error, saved_response};
use crate::profile::application::services::SaveMode;
use crate::shared::api::{text_value, ApiResponse, AppError, JsonOrMultipart};
use crate::storage::adapter::incoming::{read_upload, read_uploads};
use crate::AppState;

pub const PROFILE_NOT_FOUND: &str = "Artist profile not found";

// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────

/// Artist profile fields. Every field is optional on update.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfileRequest {
    #[schema(example = "Rebirth Brass Band")]
    pub name: Option<String>,
    #[schema(example = "New Orleans")]
    pub city: Option<String>,
    /// rap, country, pop, rock, jazz, reggae, edm, classical or other
    #[schema(example = "jazz")]
    pub genre: Option<String>,
    pub biography: Option<String>,
}

/// Multipart variant carrying up to five `photos` and one `mp3File`.
#[derive(MultipartForm)]
pub struct ArtistProfileForm {
    pub name: Option<Text<String>>,
    pub city: Option<Text<String>>,
    pub genre: Option<Text<String>>,
    pub biography: Option<Text<String>>,
    pub photos: Vec<TempFile>,
    #[multipart(rename = "mp3File")]
    pub mp3_file: Option<TempFile>,
}

pub type ArtistProfileBody = JsonOrMultipart<ArtistProfileRequest, ArtistProfileForm>;

async fn into_command(owner: UserId, body: ArtistProfileBody) -> Result<SaveArtistProfileCommand, AppError> {
    match body {
        JsonOrMultipart::Json(req) => Ok(SaveArtistProfileCommand {
            owner,
            input: ArtistProfileInput {
                name: req.name,
                city: req.city,
                genre: req.genre,
                biography: req.biography,
            },
            photos: Vec::new(),
            audio: None,
        }),
        JsonOrMultipart::Multipart(form) => {
            let photos = read_uploads(form.photos).await?;
            let audio = match form.mp3_file {
                Some(file) => Some(read_upload(file).await?),
                None => None,
            };

            Ok(SaveArtistProfileCommand {
                owner,
                input: ArtistProfileInput {
                    name: text_value(form.name),
                    city: text_value(form.city),
                    genre: text_value(form.genre),
                    biography: text_value(form.biography),
                },
                photos,
                audio,
            })
        }
    }
}

async fn save(
    user: AuthenticatedUser,
    body: ArtistProfileBody,
    data: web::Data<AppState>,
    mode: SaveMode,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Artist])?;

    let command = into_command(user.user_id, body).await?;
    let saved = data
        .artist
        .save
        .execute(command, mode)
        .await
        .map_err(|e| map_profile_error(e, PROFILE_NOT_FOUND))?;

    Ok(saved_response(
        saved.map(|artist| json!({ "artist": artist })),
        "Artist profile saved successfully",
        "Artist profile updated successfully",
    ))
}

// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────

/// Create the caller's artist profile, or merge into it when it exists
#[utoipa::path(
    post,
    path = "/api/artists/profile",
    tag = "artists",
    request_body = ArtistProfileRequest,
    responses(
        (status = 201, description = "Profile created"),
        (status = 200, description = "Existing profile updated"),
        (status = 400, description = "Validation failed", body = crate::api::schemas::ErrorResponse),
        (status = 403, description = "Caller is not an artist", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/artists/profile")]
pub async fn upsert_artist_profile_handler(
    user: AuthenticatedUser,
    body: ArtistProfileBody,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    save(user, body, data, SaveMode::Upsert).await
}

/// Update the caller's existing artist profile
#[utoipa::path(
    put,
    path = "/api/artists/profile",
    tag = "artists",
    request_body = ArtistProfileRequest,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 404, description = "No profile yet", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/artists/profile")]
pub async fn update_artist_profile_handler(
    user: AuthenticatedUser,
    body: ArtistProfileBody,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    save(user, body, data, SaveMode::UpdateExisting).await
}

#[get("/api/artists/profile/me")]
pub async fn get_my_artist_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Artist])?;

    let artist = data
        .artist
        .my_profile
        .execute(user.user_id)
        .await
        .map_err(|e| map_profile_error(e, PROFILE_NOT_FOUND))?;

    Ok(ApiResponse::success(json!({ "artist": artist })))
}

#[delete("/api/artists/profile")]
pub async fn delete_artist_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user.authorize(&[Role::Artist])?;

    data.artist
        .delete
        .execute(user.user_id)
        .await
        .map_err(|e| map_profile_error(e, PROFILE_NOT_FOUND))?;

    Ok(ApiResponse::message("Artist profile deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::application::{
        domain::entities::{fixtures::artist, Artist},
        ports::incoming::{DeleteArtistProfileUseCase, SaveArtistProfileUseCase},
    };
    use crate::profile::application::services::{ProfileError, Saved};
    use crate::shared::api::custom_multipart_config;
    use crate::shared::validation::ValidationErrors;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, stub_token_provider};
    use actix_web::{http::header::CONTENT_TYPE, http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    // ========================================================================
    // Mock Use Cases
    // ========================================================================

    #[derive(Clone)]
    struct MockSave {
        result: Result<Saved<Artist>, ProfileError>,
        seen: Arc<Mutex<Vec<(SaveArtistProfileCommand, SaveMode)>>>,
    }

    impl MockSave {
        fn returning(result: Result<Saved<Artist>, ProfileError>) -> Self {
            Self {
                result,
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl SaveArtistProfileUseCase for MockSave {
        async fn execute(
            &self,
            command: SaveArtistProfileCommand,
            mode: SaveMode,
        ) -> Result<Saved<Artist>, ProfileError> {
            self.seen.lock().unwrap().push((command, mode));
            self.result.clone()
        }
    }

    struct MockDelete(Result<(), ProfileError>);

    #[async_trait]
    impl DeleteArtistProfileUseCase for MockDelete {
        async fn execute(&self, _owner: UserId) -> Result<(), ProfileError> {
            self.0.clone()
        }
    }

    // ========================================================================
    // Tests
    // ========================================================================

    #[actix_web::test]
    async fn test_upsert_creates_profile_from_json() {
        // Arrange
        let user_id = Uuid::new_v4();
        let mock = MockSave::returning(Ok(Saved::Created(artist(UserId::from(user_id)))));
        let seen = mock.seen.clone();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Artist)
            .with_artist(|uc| uc.save = Arc::new(mock))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(upsert_artist_profile_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::post()
            .uri("/api/artists/profile")
            .insert_header(bearer(user_id))
            .set_json(json!({ "name": "Tank and the Bangas", "city": "New Orleans", "genre": "pop" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Artist profile saved successfully");
        assert_eq!(body["data"]["artist"]["userId"], user_id.to_string());

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].1, SaveMode::Upsert);
        assert_eq!(seen[0].0.input.genre.as_deref(), Some("pop"));
        assert!(seen[0].0.photos.is_empty());
    }

    #[actix_web::test]
    async fn test_upsert_reads_multipart_files() {
        let user_id = Uuid::new_v4();
        let mock = MockSave::returning(Ok(Saved::Updated(artist(UserId::from(user_id)))));
        let seen = mock.seen.clone();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Artist)
            .with_artist(|uc| uc.save = Arc::new(mock))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .app_data(custom_multipart_config())
                .service(upsert_artist_profile_handler),
        )
        .await;

        let boundary = "GULFBOUNDARY";
        let payload = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nBig Freedia\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"photos\"; filename=\"stage.png\"\r\n\
             Content-Type: image/png\r\n\r\nPNGDATA\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"mp3File\"; filename=\"bounce.mp3\"\r\n\
             Content-Type: audio/mpeg\r\n\r\nID3DATA\r\n--{b}--\r\n",
            b = boundary
        );

        let req = test::TestRequest::post()
            .uri("/api/artists/profile")
            .insert_header(bearer(user_id))
            .insert_header((CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}")))
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Artist profile updated successfully");

        let seen = seen.lock().unwrap();
        let command = &seen[0].0;
        assert_eq!(command.input.name.as_deref(), Some("Big Freedia"));
        assert_eq!(command.photos.len(), 1);
        assert_eq!(command.photos[0].content_type, "image/png");
        assert_eq!(command.photos[0].bytes, b"PNGDATA".to_vec());
        assert_eq!(command.audio.as_ref().unwrap().file_name, "bounce.mp3");
    }

    #[actix_web::test]
    async fn test_update_without_profile_is_not_found() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Artist)
            .with_artist(|uc| uc.save = Arc::new(MockSave::returning(Err(ProfileError::NotFound))))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(update_artist_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/artists/profile")
            .insert_header(bearer(user_id))
            .set_json(json!({ "biography": "Queen of bounce" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], PROFILE_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_validation_errors_are_listed() {
        let user_id = Uuid::new_v4();
        let invalid = ValidationErrors::single("genre", "Please select a valid genre");
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Artist)
            .with_artist(|uc| {
                uc.save = Arc::new(MockSave::returning(Err(ProfileError::Invalid(invalid))))
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(upsert_artist_profile_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/artists/profile")
            .insert_header(bearer(user_id))
            .set_json(json!({ "genre": "polka" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"][0]["field"], "genre");
    }

    #[actix_web::test]
    async fn test_fans_cannot_save_artist_profiles() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Fan)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(upsert_artist_profile_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/artists/profile")
            .insert_header(bearer(user_id))
            .set_json(json!({ "name": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_delete_profile() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_caller(user_id, Role::Artist)
            .with_artist(|uc| uc.delete = Arc::new(MockDelete(Ok(()))))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(stub_token_provider())
                .service(delete_artist_profile_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/artists/profile")
            .insert_header(bearer(user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Artist profile deleted successfully");
    }
}
