use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::ProfileChanges;
use crate::shared::domain::CoverageArea;
use crate::shared::validation::{optional_text, ValidationErrors};
use crate::storage::application::domain::entities::StoredFile;

pub const FULL_NAME_MAX: usize = 100;
pub const BIO_MAX: usize = 1000;

const INVALID_COVERAGE_MESSAGE: &str = "Areas of coverage must be a valid JSON array";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Journalist {
    pub id: Uuid,
    pub user_id: UserId,
    pub full_name: String,
    pub bio: Option<String>,
    pub profile_photo: Option<StoredFile>,
    pub areas_of_coverage: Vec<CoverageArea>,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewJournalist {
    pub full_name: String,
    pub bio: Option<String>,
    pub profile_photo: Option<StoredFile>,
    pub areas_of_coverage: Vec<CoverageArea>,
}

/// Coverage areas as sent by the client: a JSON array, or (from multipart forms) its text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoverageInput {
    List(Vec<String>),
    Encoded(String),
}

impl CoverageInput {
    fn into_names(self) -> Result<Option<Vec<String>>, serde_json::Error> {
        match self {
            CoverageInput::List(names) => Ok(Some(names)),
            CoverageInput::Encoded(text) if text.trim().is_empty() => Ok(None),
            CoverageInput::Encoded(text) => serde_json::from_str(&text).map(Some),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JournalistProfileInput {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub areas_of_coverage: Option<CoverageInput>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalistChanges {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub areas_of_coverage: Option<Vec<CoverageArea>>,
    pub profile_photo: Option<StoredFile>,
}

impl JournalistChanges {
    pub fn from_input(input: JournalistProfileInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let full_name = optional_text(
            &mut errors,
            "fullName",
            "Full name",
            input.full_name,
            FULL_NAME_MAX,
        );
        let bio = optional_text(&mut errors, "bio", "Bio", input.bio, BIO_MAX);
        let areas_of_coverage = match input.areas_of_coverage.map(CoverageInput::into_names) {
            None | Some(Ok(None)) => None,
            Some(Ok(Some(names))) => parse_areas(&mut errors, names),
            Some(Err(_)) => {
                errors.add("areasOfCoverage", INVALID_COVERAGE_MESSAGE);
                None
            }
        };

        errors.into_result()?;

        Ok(Self {
            full_name,
            bio,
            areas_of_coverage,
            profile_photo: None,
        })
    }
}

/// Unknown names are reported one by one; repeated names are kept once.
fn parse_areas(errors: &mut ValidationErrors, names: Vec<String>) -> Option<Vec<CoverageArea>> {
    let mut areas = Vec::with_capacity(names.len());
    let mut valid = true;

    for name in names {
        match CoverageArea::parse(&name) {
            Some(area) if !areas.contains(&area) => areas.push(area),
            Some(_) => {}
            None => {
                valid = false;
                errors.add(
                    "areasOfCoverage",
                    format!("Invalid area of coverage: {}", name.trim()),
                );
            }
        }
    }

    valid.then_some(areas)
}

impl ProfileChanges for JournalistChanges {
    type Profile = Journalist;
    type New = NewJournalist;

    fn to_new(&self) -> Result<NewJournalist, ValidationErrors> {
        let full_name = self
            .full_name
            .clone()
            .ok_or_else(|| ValidationErrors::single("fullName", "Full name is required"))?;

        Ok(NewJournalist {
            full_name,
            bio: self.bio.clone(),
            profile_photo: self.profile_photo.clone(),
            areas_of_coverage: self.areas_of_coverage.clone().unwrap_or_default(),
        })
    }

    fn apply_to(&self, journalist: &mut Journalist) {
        if let Some(full_name) = &self.full_name {
            journalist.full_name = full_name.clone();
        }
        if let Some(bio) = &self.bio {
            journalist.bio = Some(bio.clone());
        }
        if let Some(areas) = &self.areas_of_coverage {
            journalist.areas_of_coverage = areas.clone();
        }
        if let Some(photo) = &self.profile_photo {
            journalist.profile_photo = Some(photo.clone());
        }
    }

    fn new_files(&self) -> Vec<StoredFile> {
        self.profile_photo.iter().cloned().collect()
    }

    fn replaced_files(&self, current: &Journalist) -> Vec<StoredFile> {
        match self.profile_photo {
            Some(_) => current.profile_photo.iter().cloned().collect(),
            None => Vec::new(),
        }
    }
}
