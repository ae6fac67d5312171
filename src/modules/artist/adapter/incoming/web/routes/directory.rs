use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::profile::adapter::incoming::map_profile_error;
use crate::shared::api::{ApiResponse, AppError};
use crate::shared::domain::Genre;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ArtistListQuery {
    /// A genre name, or `all`
    pub genre: Option<String>,
}

impl ArtistListQuery {
    fn genre_filter(&self) -> Result<Option<Genre>, AppError> {
        match self.genre.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) if raw.eq_ignore_ascii_case("all") => Ok(None),
            Some(raw) => Genre::parse(raw)
                .map(Some)
                .ok_or_else(|| AppError::invalid("genre", "Please select a valid genre")),
        }
    }
}

/// Active artists ordered by name
#[utoipa::path(
    get,
    path = "/api/artists",
    tag = "artists",
    params(ArtistListQuery),
    responses(
        (status = 200, description = "Active artists"),
        (status = 400, description = "Unknown genre", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/artists")]
pub async fn list_artists_handler(
    query: web::Query<ArtistListQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let genre = query.genre_filter()?;

    let artists = data
        .artist
        .list
        .execute(genre)
        .await
        .map_err(|e| map_profile_error(e, "Artist not found"))?;

    Ok(ApiResponse::success(json!({ "artists": artists })))
}

#[utoipa::path(
    get,
    path = "/api/artists/{id}",
    tag = "artists",
    params(("id" = Uuid, Path, description = "Artist id")),
    responses(
        (status = 200, description = "The artist"),
        (status = 404, description = "Unknown or inactive artist", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/artists/{id}")]
pub async fn get_artist_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let artist = data
        .artist
        .get
        .execute(path.into_inner())
        .await
        .map_err(|e| map_profile_error(e, "Artist not found"))?;

    Ok(ApiResponse::success(json!({ "artist": artist })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::application::{
        domain::entities::{fixtures::artist, Artist},
        ports::incoming::{GetArtistUseCase, ListArtistsUseCase},
    };
    use crate::auth::application::domain::entities::UserId;
    use crate::profile::application::services::ProfileError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockList {
        seen: Arc<Mutex<Vec<Option<Genre>>>>,
    }

    #[async_trait]
    impl ListArtistsUseCase for MockList {
        async fn execute(&self, genre: Option<Genre>) -> Result<Vec<Artist>, ProfileError> {
            self.seen.lock().unwrap().push(genre);
            Ok(vec![artist(UserId::from(Uuid::new_v4()))])
        }
    }

    struct MockGet;

    #[async_trait]
    impl GetArtistUseCase for MockGet {
        async fn execute(&self, _id: Uuid) -> Result<Artist, ProfileError> {
            Err(ProfileError::NotFound)
        }
    }

    #[actix_web::test]
    async fn test_list_filters_by_genre_and_treats_all_as_no_filter() {
        // Arrange
        let mock = MockList::default();
        let seen = mock.seen.clone();
        let state = TestAppStateBuilder::default()
            .with_artist(|uc| uc.list = Arc::new(mock))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(list_artists_handler)).await;

        // Act
        for uri in ["/api/artists?genre=Jazz", "/api/artists?genre=all", "/api/artists"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        // Assert
        assert_eq!(*seen.lock().unwrap(), vec![Some(Genre::Jazz), None, None]);
    }

    #[actix_web::test]
    async fn test_list_rejects_unknown_genre() {
        let state = TestAppStateBuilder::default()
            .with_artist(|uc| uc.list = Arc::new(MockList::default()))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(list_artists_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/artists?genre=polka")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Please select a valid genre");
    }

    #[actix_web::test]
    async fn test_get_unknown_artist_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_artist(|uc| uc.get = Arc::new(MockGet))
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_artist_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/artists/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Artist not found");
    }
}
