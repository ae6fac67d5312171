use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::domain::City;
use crate::shared::validation::{optional_text, parse_iso_date, required_text, ValidationErrors};

pub const ARTIST_BAND_NAME_MAX: usize = 100;
pub const TIME_MAX: usize = 50;
pub const DESCRIPTION_MAX: usize = 1000;

pub const UPCOMING_DEFAULT_LIMIT: u64 = 10;
pub const UPCOMING_MAX_LIMIT: u64 = 100;

/// The hosting venue as shown alongside its events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventVenue {
    pub id: Uuid,
    pub venue_name: String,
    pub city: City,
    pub address: String,
    pub seating_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub venue_id: Uuid,
    pub artist_band_name: String,
    pub time: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    /// Snapshot of the venue's city when the event was created.
    pub city: City,
    pub color: String,
    #[serde(skip)]
    pub sequence: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<EventVenue>,
}

/// A validated event ready to be stored; sequence and colour are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub venue_id: Uuid,
    pub city: City,
    pub artist_band_name: String,
    pub time: String,
    pub date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EventInput {
    pub artist_band_name: Option<String>,
    pub time: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Validated partial update. City and colour never change after creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventChanges {
    pub artist_band_name: Option<String>,
    pub time: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl EventChanges {
    pub fn apply_to(&self, event: &mut Event) {
        if let Some(name) = &self.artist_band_name {
            event.artist_band_name = name.clone();
        }
        if let Some(time) = &self.time {
            event.time = time.clone();
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(description) = &self.description {
            event.description = Some(description.clone());
        }
    }
}

impl EventInput {
    pub fn into_new(self, venue: &EventVenue, today: NaiveDate) -> Result<NewEvent, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let artist_band_name = required_text(
            &mut errors,
            "artistBandName",
            "Artist/Band name",
            self.artist_band_name,
            ARTIST_BAND_NAME_MAX,
        );
        let time = required_text(&mut errors, "time", "Time", self.time, TIME_MAX);
        let date = match self.date {
            Some(raw) => event_date(&mut errors, &raw, today),
            None => {
                errors.add("date", "Date must be a valid date");
                None
            }
        };
        let description = optional_text(
            &mut errors,
            "description",
            "Description",
            self.description,
            DESCRIPTION_MAX,
        );

        match (artist_band_name, time, date) {
            (Some(artist_band_name), Some(time), Some(date)) if errors.is_empty() => Ok(NewEvent {
                venue_id: venue.id,
                city: venue.city,
                artist_band_name,
                time,
                date,
                description,
            }),
            _ => Err(errors),
        }
    }

    pub fn into_changes(self, today: NaiveDate) -> Result<EventChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let artist_band_name = optional_text(
            &mut errors,
            "artistBandName",
            "Artist/Band name",
            self.artist_band_name,
            ARTIST_BAND_NAME_MAX,
        );
        let time = optional_text(&mut errors, "time", "Time", self.time, TIME_MAX);
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => event_date(&mut errors, raw, today),
        };
        let description = optional_text(
            &mut errors,
            "description",
            "Description",
            self.description,
            DESCRIPTION_MAX,
        );

        errors.into_result()?;

        Ok(EventChanges {
            artist_band_name,
            time,
            date,
            description,
        })
    }
}

fn event_date(errors: &mut ValidationErrors, raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    let Some(date) = parse_iso_date(raw) else {
        errors.add("date", "Date must be a valid date");
        return None;
    };

    if date < today {
        errors.add("date", "Event date cannot be in the past");
        return None;
    }

    Some(date)
}
