use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::City;
use crate::shared::validation::{required_text, ValidationErrors};
use crate::storage::application::domain::entities::StoredFile;

pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 5000;
pub const CREDIT_MAX: usize = 200;

pub const INVALID_LOCATION_MESSAGE: &str =
    "Location must be New Orleans, Biloxi, Mobile, or Pensacola";

/// The journalist account credited with a story.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsAuthor {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: Uuid,
    pub author_id: UserId,
    pub title: String,
    pub description: String,
    pub location: City,
    pub credit: String,
    pub photos: Vec<StoredFile>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<NewsAuthor>,
}

/// Raw story fields as submitted. Create and update validate the same way.
#[derive(Debug, Clone, Default)]
pub struct NewsInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub credit: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsDraft {
    pub title: String,
    pub description: String,
    pub location: City,
    pub credit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewNews {
    pub author_id: UserId,
    pub draft: NewsDraft,
    pub photos: Vec<StoredFile>,
}

impl NewsInput {
    pub fn into_draft(self) -> Result<NewsDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required_text(&mut errors, "title", "Title", self.title, TITLE_MAX);
        let description = required_text(
            &mut errors,
            "description",
            "Description",
            self.description,
            DESCRIPTION_MAX,
        );
        let location = required_text(&mut errors, "location", "Location", self.location, usize::MAX)
            .and_then(|raw| {
                let city = City::parse(&raw);
                errors.ensure(city.is_some(), "location", INVALID_LOCATION_MESSAGE);
                city
            });
        let credit = required_text(&mut errors, "credit", "Credit", self.credit, CREDIT_MAX);

        match (title, description, location, credit) {
            (Some(title), Some(description), Some(location), Some(credit)) if errors.is_empty() => {
                Ok(NewsDraft {
                    title,
                    description,
                    location,
                    credit,
                })
            }
            _ => Err(errors),
        }
    }
}

impl NewsDraft {
    pub fn apply_to(self, news: &mut News) {
        news.title = self.title;
        news.description = self.description;
        news.location = self.location;
        news.credit = self.credit;
    }
}

/// Location filter of the public listing. `all` or nothing lists every city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFilter {
    Any,
    City(City),
    /// A location no story can have.
    Unmatched,
}

impl LocationFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|r| !r.is_empty()) {
            None => LocationFilter::Any,
            Some(r) if r.eq_ignore_ascii_case("all") => LocationFilter::Any,
            Some(r) => City::parse(r).map_or(LocationFilter::Unmatched, LocationFilter::City),
        }
    }
}
