use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::ProfileChanges;
use crate::shared::domain::Genre;
use crate::shared::validation::{optional_text, ValidationErrors};
use crate::storage::application::domain::entities::StoredFile;

pub const NAME_MAX: usize = 100;
pub const CITY_MAX: usize = 100;
pub const BIOGRAPHY_MAX: usize = 2000;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub city: String,
    pub genre: Genre,
    pub biography: Option<String>,
    pub photos: Vec<StoredFile>,
    pub audio_track: Option<StoredFile>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Artist {
    pub fn stored_files(&self) -> Vec<StoredFile> {
        self.photos
            .iter()
            .chain(self.audio_track.iter())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub genre: Genre,
    pub biography: Option<String>,
    pub photos: Vec<StoredFile>,
    pub audio_track: Option<StoredFile>,
}

/// Raw profile fields as sent by the client.
#[derive(Debug, Clone, Default)]
pub struct ArtistProfileInput {
    pub name: Option<String>,
    pub city: Option<String>,
    pub genre: Option<String>,
    pub biography: Option<String>,
}

/// Validated artist profile changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistChanges {
    pub name: Option<String>,
    pub city: Option<String>,
    pub genre: Option<Genre>,
    pub biography: Option<String>,
    pub photos: Option<Vec<StoredFile>>,
    pub audio_track: Option<StoredFile>,
}

impl ArtistChanges {
    pub fn from_input(input: ArtistProfileInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = optional_text(&mut errors, "name", "Name", input.name, NAME_MAX);
        let city = optional_text(&mut errors, "city", "City", input.city, CITY_MAX);
        let biography = optional_text(
            &mut errors,
            "biography",
            "Biography",
            input.biography,
            BIOGRAPHY_MAX,
        );

        let genre = match input.genre.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let parsed = Genre::parse(raw);
                errors.ensure(parsed.is_some(), "genre", "Please select a valid genre");
                parsed
            }
        };

        errors.into_result()?;

        Ok(Self {
            name,
            city,
            genre,
            biography,
            photos: None,
            audio_track: None,
        })
    }
}

impl ProfileChanges for ArtistChanges {
    type Profile = Artist;
    type New = NewArtist;

    fn to_new(&self) -> Result<NewArtist, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.ensure(self.name.is_some(), "name", "Artist name is required");
        errors.ensure(self.city.is_some(), "city", "City is required");
        errors.ensure(self.genre.is_some(), "genre", "Please select a valid genre");

        match (&self.name, &self.city, self.genre) {
            (Some(name), Some(city), Some(genre)) => Ok(NewArtist {
                name: name.clone(),
                city: city.clone(),
                genre,
                biography: self.biography.clone(),
                photos: self.photos.clone().unwrap_or_default(),
                audio_track: self.audio_track.clone(),
            }),
            _ => Err(errors),
        }
    }

    fn apply_to(&self, artist: &mut Artist) {
        if let Some(name) = &self.name {
            artist.name = name.clone();
        }
        if let Some(city) = &self.city {
            artist.city = city.clone();
        }
        if let Some(genre) = self.genre {
            artist.genre = genre;
        }
        if let Some(biography) = &self.biography {
            artist.biography = Some(biography.clone());
        }
        if let Some(photos) = &self.photos {
            artist.photos = photos.clone();
        }
        if let Some(track) = &self.audio_track {
            artist.audio_track = Some(track.clone());
        }
    }

    fn new_files(&self) -> Vec<StoredFile> {
        self.photos
            .iter()
            .flatten()
            .chain(self.audio_track.iter())
            .cloned()
            .collect()
    }

    fn replaced_files(&self, current: &Artist) -> Vec<StoredFile> {
        let mut replaced = Vec::new();
        if self.photos.is_some() {
            replaced.extend(current.photos.iter().cloned());
        }
        if self.audio_track.is_some() {
            replaced.extend(current.audio_track.iter().cloned());
        }
        replaced
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub fn artist(owner: UserId) -> Artist {
        let now = Utc::now();
        Artist {
            id: Uuid::new_v4(),
            user_id: owner,
            name: "Tank and the Bangas".to_string(),
            city: "New Orleans".to_string(),
            genre: Genre::Pop,
            biography: None,
            photos: vec![StoredFile {
                url: "https://cdn.test/gulf-music/artists/old.jpg".to_string(),
                storage_key: "gulf-music/artists/old.jpg".to_string(),
                original_name: None,
            }],
            audio_track: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::artist;
    use super::*;

    fn input(name: Option<&str>, city: Option<&str>, genre: Option<&str>) -> ArtistProfileInput {
        ArtistProfileInput {
            name: name.map(String::from),
            city: city.map(String::from),
            genre: genre.map(String::from),
            biography: None,
        }
    }

    #[test]
    fn input_is_trimmed_and_genre_normalized() {
        let changes =
            ArtistChanges::from_input(input(Some("  Big Freedia "), Some("New Orleans"), Some("Rap")))
                .unwrap();

        assert_eq!(changes.name.as_deref(), Some("Big Freedia"));
        assert_eq!(changes.genre, Some(Genre::Rap));
    }

    #[test]
    fn invalid_genre_and_long_name_are_reported_together() {
        let err = ArtistChanges::from_input(input(Some(&"a".repeat(101)), None, Some("polka")))
            .unwrap_err();

        assert!(err.has_field("name"));
        assert!(err.has_field("genre"));
        assert_eq!(err.errors()[0].message, "Name cannot exceed 100 characters");
    }

    #[test]
    fn creation_requires_name_city_and_genre() {
        let changes = ArtistChanges::from_input(input(None, None, None)).unwrap();

        let err = changes.to_new().unwrap_err();
        let messages: Vec<_> = err.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Artist name is required", "City is required", "Please select a valid genre"]
        );
    }

    #[test]
    fn merge_keeps_unsent_fields_and_photos() {
        let mut existing = artist(UserId::from(Uuid::new_v4()));
        let changes = ArtistChanges::from_input(input(None, Some("Biloxi"), None)).unwrap();

        changes.apply_to(&mut existing);

        assert_eq!(existing.city, "Biloxi");
        assert_eq!(existing.name, "Tank and the Bangas");
        assert_eq!(existing.photos.len(), 1);
        assert!(changes.replaced_files(&existing).is_empty());
    }

    #[test]
    fn new_photos_replace_old_ones() {
        let existing = artist(UserId::from(Uuid::new_v4()));
        let changes = ArtistChanges {
            photos: Some(vec![]),
            ..Default::default()
        };

        let replaced = changes.replaced_files(&existing);
        assert_eq!(replaced[0].storage_key, "gulf-music/artists/old.jpg");
    }
}
