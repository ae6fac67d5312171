use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::admin::adapter::incoming::web::routes::ToggleRequest;
use crate::artist::adapter::incoming::web::routes::ArtistProfileRequest;
use crate::auth::adapter::incoming::web::routes::{AuthResponse, LoginRequestDto, RegisterUserRequest};
use crate::contact::adapter::incoming::web::routes::ContactRequest;
use crate::event::adapter::incoming::web::routes::EventRequest;
use crate::journalist::adapter::incoming::web::routes::JournalistProfileRequest;
use crate::news::adapter::incoming::web::routes::NewsRequest;
use crate::venue::adapter::incoming::web::routes::{AddShowRequest, VenueProfileRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gulf Coast Music API",
        version = "1.0.0",
        description = "Artists, venues, journalists and fans of the Gulf Coast music scene",
        contact(
            name = "API Support",
            email = "support@gulfcoastmusic.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Artist endpoints
        crate::artist::adapter::incoming::web::routes::list_artists_handler,
        crate::artist::adapter::incoming::web::routes::get_artist_handler,
        crate::artist::adapter::incoming::web::routes::upsert_artist_profile_handler,
        crate::artist::adapter::incoming::web::routes::update_artist_profile_handler,

        // Venue endpoints
        crate::venue::adapter::incoming::web::routes::list_venues_handler,
        crate::venue::adapter::incoming::web::routes::get_venue_handler,
        crate::venue::adapter::incoming::web::routes::upsert_venue_profile_handler,
        crate::venue::adapter::incoming::web::routes::update_venue_profile_handler,
        crate::venue::adapter::incoming::web::routes::add_show_handler,
        crate::venue::adapter::incoming::web::routes::venue_calendar_handler,

        // Journalist endpoints
        crate::journalist::adapter::incoming::web::routes::list_journalists_handler,
        crate::journalist::adapter::incoming::web::routes::get_journalist_handler,
        crate::journalist::adapter::incoming::web::routes::verify_journalist_handler,
        crate::journalist::adapter::incoming::web::routes::upsert_journalist_profile_handler,
        crate::journalist::adapter::incoming::web::routes::update_journalist_profile_handler,

        // Event endpoints
        crate::event::adapter::incoming::web::routes::list_events_handler,
        crate::event::adapter::incoming::web::routes::upcoming_events_handler,
        crate::event::adapter::incoming::web::routes::my_events_handler,
        crate::event::adapter::incoming::web::routes::create_event_handler,
        crate::event::adapter::incoming::web::routes::get_event_handler,
        crate::event::adapter::incoming::web::routes::update_event_handler,
        crate::event::adapter::incoming::web::routes::delete_event_handler,

        // News endpoints
        crate::news::adapter::incoming::web::routes::list_news_handler,
        crate::news::adapter::incoming::web::routes::my_news_handler,
        crate::news::adapter::incoming::web::routes::create_news_handler,
        crate::news::adapter::incoming::web::routes::get_news_handler,
        crate::news::adapter::incoming::web::routes::update_news_handler,
        crate::news::adapter::incoming::web::routes::delete_news_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::contact::adapter::incoming::web::routes::list_contacts_handler,
        crate::contact::adapter::incoming::web::routes::mailbox_handler,
        crate::contact::adapter::incoming::web::routes::mark_contact_read_handler,
        crate::contact::adapter::incoming::web::routes::delete_contact_handler,

        // Admin endpoints
        crate::admin::adapter::incoming::web::routes::dashboard_handler,
        crate::admin::adapter::incoming::web::routes::settings_handler,
        crate::admin::adapter::incoming::web::routes::list_users_handler,
        crate::admin::adapter::incoming::web::routes::verify_user_handler,
        crate::admin::adapter::incoming::web::routes::delete_user_handler,
        crate::admin::adapter::incoming::web::routes::list_content_handler,
        crate::admin::adapter::incoming::web::routes::toggle_content_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Request and response DTOs
            RegisterUserRequest,
            LoginRequestDto,
            AuthResponse,
            ArtistProfileRequest,
            VenueProfileRequest,
            AddShowRequest,
            JournalistProfileRequest,
            EventRequest,
            NewsRequest,
            ContactRequest,
            ToggleRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and the current account"),
        (name = "artists", description = "Artist profiles and directory"),
        (name = "venues", description = "Venue profiles, directory and calendar"),
        (name = "journalists", description = "Journalist profiles and verification"),
        (name = "events", description = "Events hosted by venues"),
        (name = "news", description = "News stories written by journalists"),
        (name = "contact", description = "Public contact form"),
        (name = "admin", description = "Moderation and site administration"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_tagged_route() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/auth/register"));
        assert!(doc.paths.paths.contains_key("/api/events/upcoming"));
        assert!(doc.paths.paths.contains_key("/api/admin/content/{kind}/{id}/toggle"));
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("BearerAuth")));
    }
}
