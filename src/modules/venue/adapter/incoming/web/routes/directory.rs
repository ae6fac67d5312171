use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::profile::adapter::incoming::map_profile_error;
use crate::shared::api::{ApiResponse, AppError};
use crate::shared::domain::CityFilter;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct VenueListQuery {
    /// Unknown or missing cities fall back to mobile
    pub city: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/venues",
    tag = "venues",
    params(VenueListQuery),
    responses((status = 200, description = "Active venues of the city, by name"))
)]
#[get("/api/venues")]
pub async fn list_venues_handler(
    query: web::Query<VenueListQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let city = CityFilter::resolve(query.city.as_deref());

    let venues = data
        .venue
        .list
        .execute(city)
        .await
        .map_err(|e| map_profile_error(e, "Venue not found"))?;

    Ok(ApiResponse::success(json!({ "venues": venues })))
}

#[utoipa::path(
    get,
    path = "/api/venues/{id}",
    tag = "venues",
    params(("id" = Uuid, Path, description = "Venue id")),
    responses(
        (status = 200, description = "The venue"),
        (status = 404, description = "Unknown venue", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/venues/{id}")]
pub async fn get_venue_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let venue = data
        .venue
        .get
        .execute(path.into_inner())
        .await
        .map_err(|e| map_profile_error(e, "Venue not found"))?;

    Ok(ApiResponse::success(json!({ "venue": venue })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::profile::application::services::ProfileError;
    use crate::shared::domain::City;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::venue::application::{
        domain::entities::{fixtures::venue, Venue},
        ports::incoming::ListVenuesUseCase,
    };
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockList {
        seen: Arc<Mutex<Vec<City>>>,
    }

    #[async_trait]
    impl ListVenuesUseCase for MockList {
        async fn execute(&self, city: City) -> Result<Vec<Venue>, ProfileError> {
            self.seen.lock().unwrap().push(city);
            Ok(vec![venue(UserId::from(Uuid::new_v4()), city)])
        }
    }

    #[actix_web::test]
    async fn test_list_falls_back_to_default_city() {
        let mock = MockList::default();
        let seen = mock.seen.clone();
        let state = TestAppStateBuilder::default()
            .with_venue(|uc| uc.list = Arc::new(mock))
            .build();
        let app = test::init_service(App::new().app_data(state).service(list_venues_handler)).await;

        for uri in ["/api/venues?city=%20BILOXI%20", "/api/venues?city=atlantis", "/api/venues"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        assert_eq!(
            *seen.lock().unwrap(),
            vec![City::Biloxi, City::Mobile, City::Mobile]
        );
    }

    #[actix_web::test]
    async fn test_malformed_id_is_not_found() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(crate::shared::api::json_config::custom_path_config())
                .service(get_venue_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/venues/not-a-uuid").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
