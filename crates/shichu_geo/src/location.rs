//! Location and coordinate value types.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Geographic coordinates in degrees, east and north positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Longitude in degrees. Range: [-180, 180].
    pub longitude: f64,
    /// Latitude in degrees. Range: [-90, 90].
    pub latitude: f64,
}

impl Coordinates {
    /// Create validated coordinates.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, GeoError> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidCoordinates("longitude must be within [-180, 180]"));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidCoordinates("latitude must be within [-90, 90]"));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }
}

/// A named place with its coordinates and political time zone.
///
/// Registry entries are immutable reference data. Callers may also build
/// their own `Location` (an "extended location") and pass it straight to the
/// calculation entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Display name, usually in Japanese script.
    pub name: String,
    /// Romanized name.
    pub romaji: String,
    /// Hiragana reading.
    pub kana: String,
    /// Further names that should resolve to this place (prefecture, old names).
    #[serde(default)]
    pub aliases: Vec<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub coordinates: Coordinates,
    /// IANA time-zone identifier, e.g. `Asia/Tokyo`.
    pub time_zone: String,
}

impl Location {
    /// Build a location from explicit coordinates only.
    ///
    /// Used when a caller supplies raw coordinates instead of a place name;
    /// the name fields are left as a formatted coordinate string.
    pub fn from_coordinates(coordinates: Coordinates, time_zone: impl Into<String>) -> Self {
        let label = format!("{:.4},{:.4}", coordinates.longitude, coordinates.latitude);
        Self {
            name: label.clone(),
            romaji: label,
            kana: String::new(),
            aliases: Vec::new(),
            country: None,
            coordinates,
            time_zone: time_zone.into(),
        }
    }

    /// Every searchable name of this location, display name first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.romaji.as_str(), self.kana.as_str()]
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
            .filter(|s| !s.is_empty())
    }

    /// Whether this place lies in Japan.
    pub fn is_japan(&self) -> bool {
        self.country.as_deref() == Some("JP")
    }
}
