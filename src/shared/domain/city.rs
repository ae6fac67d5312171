use serde::{Deserialize, Serialize};
use std::fmt;

/// Cities the community covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "new orleans")]
    NewOrleans,
    #[serde(rename = "biloxi")]
    Biloxi,
    #[serde(rename = "mobile")]
    Mobile,
    #[serde(rename = "pensacola")]
    Pensacola,
}

impl City {
    pub const ALL: [City; 4] = [City::NewOrleans, City::Biloxi, City::Mobile, City::Pensacola];

    /// Used whenever a listing is asked for a city we do not know.
    pub const DEFAULT: City = City::Mobile;

    pub fn as_str(&self) -> &'static str {
        match self {
            City::NewOrleans => "new orleans",
            City::Biloxi => "biloxi",
            City::Mobile => "mobile",
            City::Pensacola => "pensacola",
        }
    }

    /// Case- and whitespace-insensitive lookup.
    pub fn parse(raw: &str) -> Option<City> {
        let normalized = raw.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.as_str() == normalized)
    }

    pub fn all_names() -> Vec<&'static str> {
        City::ALL.iter().map(City::as_str).collect()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// City filter of public listings: never fails, unknown input falls back to [`City::DEFAULT`].
pub struct CityFilter;

impl CityFilter {
    pub fn resolve(raw: Option<&str>) -> City {
        raw.and_then(City::parse).unwrap_or(City::DEFAULT)
    }
}

/// Areas a journalist may cover: any city, or a wider scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageArea {
    #[serde(rename = "new orleans")]
    NewOrleans,
    Biloxi,
    Mobile,
    Pensacola,
    Regional,
    National,
}

impl CoverageArea {
    pub const ALL: [CoverageArea; 6] = [
        CoverageArea::NewOrleans,
        CoverageArea::Biloxi,
        CoverageArea::Mobile,
        CoverageArea::Pensacola,
        CoverageArea::Regional,
        CoverageArea::National,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageArea::NewOrleans => "new orleans",
            CoverageArea::Biloxi => "biloxi",
            CoverageArea::Mobile => "mobile",
            CoverageArea::Pensacola => "pensacola",
            CoverageArea::Regional => "regional",
            CoverageArea::National => "national",
        }
    }

    pub fn parse(raw: &str) -> Option<CoverageArea> {
        let normalized = raw.trim().to_lowercase();
        CoverageArea::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
    }
}
