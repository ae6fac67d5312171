use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Rap,
    Country,
    Pop,
    Rock,
    Jazz,
    Reggae,
    Edm,
    Classical,
    Other,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Rap,
        Genre::Country,
        Genre::Pop,
        Genre::Rock,
        Genre::Jazz,
        Genre::Reggae,
        Genre::Edm,
        Genre::Classical,
        Genre::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Rap => "rap",
            Genre::Country => "country",
            Genre::Pop => "pop",
            Genre::Rock => "rock",
            Genre::Jazz => "jazz",
            Genre::Reggae => "reggae",
            Genre::Edm => "edm",
            Genre::Classical => "classical",
            Genre::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Option<Genre> {
        let normalized = raw.trim().to_lowercase();
        Genre::ALL.into_iter().find(|g| g.as_str() == normalized)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
