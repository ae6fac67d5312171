use serde::Serialize;
use uuid::Uuid;

use crate::artist::application::domain::entities::Artist;
use crate::auth::application::domain::entities::{Role, UserId, UserView};
use crate::event::application::domain::entities::Event;
use crate::news::application::domain::entities::News;
use crate::shared::pagination::PageRequest;
use crate::shared::validation::ValidationErrors;
use crate::storage::application::domain::upload_policy::UploadPolicy;
use crate::venue::application::domain::entities::Venue;

pub const RECENT_USERS_LIMIT: u64 = 5;
pub const UPCOMING_EVENTS_LIMIT: u64 = 5;

pub const INVALID_CONTENT_TYPE_MESSAGE: &str = "Invalid content type";

/// The kinds of published content an admin can moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Artist,
    Venue,
    News,
    Event,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Artist,
        ContentKind::Venue,
        ContentKind::News,
        ContentKind::Event,
    ];

    /// Plural form, as in `?type=artists`.
    pub fn parse_collection(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "artists" => Some(ContentKind::Artist),
            "venues" => Some(ContentKind::Venue),
            "news" => Some(ContentKind::News),
            "events" => Some(ContentKind::Event),
            _ => None,
        }
    }

    /// Singular form, as in `/content/artist/{id}/toggle`.
    pub fn parse_item(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "artist" => Some(ContentKind::Artist),
            "venue" => Some(ContentKind::Venue),
            "news" => Some(ContentKind::News),
            "event" => Some(ContentKind::Event),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Every account, active or not.
    pub total_users: u64,
    pub total_artists: u64,
    pub total_venues: u64,
    pub total_news: u64,
    pub total_events: u64,
    /// Unread contact messages.
    pub pending_contacts: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCount {
    pub role: Role,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub user_stats: Vec<RoleCount>,
    pub recent_users: Vec<UserView>,
    pub upcoming_events: Vec<Event>,
}

/// Filters of the admin user list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub verified: Option<bool>,
    /// Matched case-insensitively against username and email.
    pub search: Option<String>,
    pub page: PageRequest,
}

impl UserFilter {
    /// `role=all` and a blank role both mean every role.
    pub fn from_query(
        role: Option<&str>,
        verified: Option<bool>,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Self, ValidationErrors> {
        let role = match role.map(str::trim) {
            None | Some("") => None,
            Some(raw) if raw.eq_ignore_ascii_case("all") => None,
            Some(raw) => Some(
                Role::parse(raw).ok_or_else(|| ValidationErrors::single("role", "Invalid role"))?,
            ),
        };

        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            role,
            verified,
            search,
            page,
        })
    }
}

/// Account that owns an artist or venue profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentOwner {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentItem {
    Artist(Artist),
    Venue(Venue),
    News(News),
    Event(Event),
}

impl ContentItem {
    pub fn id(&self) -> Uuid {
        match self {
            ContentItem::Artist(a) => a.id,
            ContentItem::Venue(v) => v.id,
            ContentItem::News(n) => n.id,
            ContentItem::Event(e) => e.id,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            ContentItem::Artist(a) => a.is_active,
            ContentItem::Venue(v) => v.is_active,
            ContentItem::News(n) => n.is_active,
            ContentItem::Event(e) => e.is_active,
        }
    }
}

/// One row of the moderation queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentEntry {
    #[serde(flatten)]
    pub content: ContentItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ContentOwner>,
}

impl ContentEntry {
    pub fn new(content: ContentItem) -> Self {
        Self {
            content,
            user: None,
        }
    }

    pub fn owned_by(content: ContentItem, owner: Option<ContentOwner>) -> Self {
        Self {
            content,
            user: owner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
    pub maintenance_mode: bool,
    pub allow_registrations: bool,
    /// Megabytes.
    pub max_file_size: usize,
    pub allowed_file_types: Vec<String>,
    pub email_notifications: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Gulf Coast Music".to_string(),
            site_description: "Your premier platform for Gulf Coast music scene".to_string(),
            maintenance_mode: false,
            allow_registrations: true,
            max_file_size: UploadPolicy::MAX_FILE_SIZE_MB,
            allowed_file_types: UploadPolicy::new()
                .allowed_mime_types()
                .into_iter()
                .map(str::to_string)
                .collect(),
            email_notifications: true,
        }
    }
}
