use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::ProfileChanges;
use crate::shared::domain::City;
use crate::shared::validation::{optional_text, parse_iso_date, ValidationErrors};
use crate::storage::application::domain::entities::StoredFile;

pub const VENUE_NAME_MAX: usize = 100;
pub const ADDRESS_MAX: usize = 255;
pub const BIOGRAPHY_MAX: usize = 2000;
pub const OPENING_MAX: usize = 100;
pub const SHOW_ARTIST_MAX: usize = 100;
pub const SHOW_TIME_MAX: usize = 50;

pub const INVALID_CITY_MESSAGE: &str = "City must be New Orleans, Biloxi, Mobile, or Pensacola";

/// A booking listed on the venue calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub artist: String,
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: Uuid,
    pub user_id: UserId,
    pub venue_name: String,
    pub city: City,
    pub address: String,
    pub seating_capacity: u32,
    pub biography: Option<String>,
    pub open_hours: String,
    pub open_days: String,
    pub photos: Vec<StoredFile>,
    /// Position among the venues of `city` at creation time. Never recomputed.
    pub registration_order: u32,
    pub color_code: String,
    pub shows: Vec<Show>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Venue fields shown on the city calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub id: Uuid,
    pub venue_name: String,
    pub color_code: String,
    pub shows: Vec<Show>,
}

impl From<Venue> for CalendarEntry {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            venue_name: venue.venue_name,
            color_code: venue.color_code,
            shows: venue.shows,
        }
    }
}

/// Everything a new venue row needs except the order and colour the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub venue_name: String,
    pub city: City,
    pub address: String,
    pub seating_capacity: u32,
    pub biography: Option<String>,
    pub open_hours: String,
    pub open_days: String,
    pub photos: Vec<StoredFile>,
}

#[derive(Debug, Clone, Default)]
pub struct VenueProfileInput {
    pub venue_name: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub seating_capacity: Option<String>,
    pub biography: Option<String>,
    pub open_hours: Option<String>,
    pub open_days: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueChanges {
    pub venue_name: Option<String>,
    pub city: Option<City>,
    pub address: Option<String>,
    pub seating_capacity: Option<u32>,
    pub biography: Option<String>,
    pub open_hours: Option<String>,
    pub open_days: Option<String>,
    pub photos: Option<Vec<StoredFile>>,
}

impl VenueChanges {
    pub fn from_input(input: VenueProfileInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let venue_name = optional_text(
            &mut errors,
            "venueName",
            "Venue name",
            input.venue_name,
            VENUE_NAME_MAX,
        );
        let address = optional_text(&mut errors, "address", "Address", input.address, ADDRESS_MAX);
        let biography = optional_text(
            &mut errors,
            "biography",
            "Biography",
            input.biography,
            BIOGRAPHY_MAX,
        );
        let open_hours = optional_text(
            &mut errors,
            "openHours",
            "Open hours",
            input.open_hours,
            OPENING_MAX,
        );
        let open_days = optional_text(
            &mut errors,
            "openDays",
            "Open days",
            input.open_days,
            OPENING_MAX,
        );

        let city = match input.city.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let parsed = City::parse(raw);
                errors.ensure(parsed.is_some(), "city", INVALID_CITY_MESSAGE);
                parsed
            }
        };

        let seating_capacity = match input.seating_capacity.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let parsed = raw.parse::<u32>().ok().filter(|n| *n >= 1);
                errors.ensure(
                    parsed.is_some(),
                    "seatingCapacity",
                    "Seating capacity must be a positive number",
                );
                parsed
            }
        };

        errors.into_result()?;

        Ok(Self {
            venue_name,
            city,
            address,
            seating_capacity,
            biography,
            open_hours,
            open_days,
            photos: None,
        })
    }
}

impl ProfileChanges for VenueChanges {
    type Profile = Venue;
    type New = NewVenue;

    fn to_new(&self) -> Result<NewVenue, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.ensure(self.venue_name.is_some(), "venueName", "Venue name is required");
        errors.ensure(self.city.is_some(), "city", INVALID_CITY_MESSAGE);
        errors.ensure(self.address.is_some(), "address", "Address is required");
        errors.ensure(
            self.seating_capacity.is_some(),
            "seatingCapacity",
            "Seating capacity must be a positive number",
        );
        errors.ensure(self.open_hours.is_some(), "openHours", "Open hours are required");
        errors.ensure(self.open_days.is_some(), "openDays", "Open days are required");

        match (
            &self.venue_name,
            self.city,
            &self.address,
            self.seating_capacity,
            &self.open_hours,
            &self.open_days,
        ) {
            (Some(name), Some(city), Some(address), Some(capacity), Some(hours), Some(days)) => {
                Ok(NewVenue {
                    venue_name: name.clone(),
                    city,
                    address: address.clone(),
                    seating_capacity: capacity,
                    biography: self.biography.clone(),
                    open_hours: hours.clone(),
                    open_days: days.clone(),
                    photos: self.photos.clone().unwrap_or_default(),
                })
            }
            _ => Err(errors),
        }
    }

    /// Moving a venue to another city keeps its registration order and colour.
    fn apply_to(&self, venue: &mut Venue) {
        if let Some(name) = &self.venue_name {
            venue.venue_name = name.clone();
        }
        if let Some(city) = self.city {
            venue.city = city;
        }
        if let Some(address) = &self.address {
            venue.address = address.clone();
        }
        if let Some(capacity) = self.seating_capacity {
            venue.seating_capacity = capacity;
        }
        if let Some(biography) = &self.biography {
            venue.biography = Some(biography.clone());
        }
        if let Some(hours) = &self.open_hours {
            venue.open_hours = hours.clone();
        }
        if let Some(days) = &self.open_days {
            venue.open_days = days.clone();
        }
        if let Some(photos) = &self.photos {
            venue.photos = photos.clone();
        }
    }

    fn new_files(&self) -> Vec<StoredFile> {
        self.photos.clone().unwrap_or_default()
    }

    fn replaced_files(&self, current: &Venue) -> Vec<StoredFile> {
        match self.photos {
            Some(_) => current.photos.clone(),
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShowInput {
    pub artist: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl Show {
    pub fn from_input(input: ShowInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let artist = optional_text(&mut errors, "artist", "Artist", input.artist, SHOW_ARTIST_MAX);
        errors.ensure(
            artist.is_some() || errors.has_field("artist"),
            "artist",
            "Artist is required",
        );

        let time = optional_text(&mut errors, "time", "Time", input.time, SHOW_TIME_MAX);
        errors.ensure(time.is_some() || errors.has_field("time"), "time", "Time is required");

        let date = input.date.as_deref().and_then(parse_iso_date);
        errors.ensure(date.is_some(), "date", "Date must be a valid date");

        match (artist, date, time) {
            (Some(artist), Some(date), Some(time)) if errors.is_empty() => {
                Ok(Show { artist, date, time })
            }
            _ => Err(errors),
        }
    }
}
