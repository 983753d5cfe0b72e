//! The location registry: exact, fuzzy and nearest lookup over a fixed table.

use std::sync::LazyLock;

use crate::cities::{CITIES, CityRecord};
use crate::distance::haversine_km;
use crate::error::GeoError;
use crate::location::{Coordinates, Location};
use crate::search::{SearchHit, normalize_name, rank};

/// Read-only table of named places.
///
/// The built-in instance is available through [`builtin_registry`]; tests and
/// callers with their own gazetteer can construct one with [`LocationRegistry::new`].
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    /// Normalized names, parallel to `locations`.
    keys: Vec<Vec<String>>,
}

impl From<&CityRecord> for Location {
    fn from(rec: &CityRecord) -> Self {
        Self {
            name: rec.name.to_string(),
            romaji: rec.romaji.to_string(),
            kana: rec.kana.to_string(),
            aliases: rec.aliases.iter().map(|s| s.to_string()).collect(),
            country: Some(rec.country.to_string()),
            coordinates: Coordinates {
                longitude: rec.longitude,
                latitude: rec.latitude,
            },
            time_zone: rec.time_zone.to_string(),
        }
    }
}

impl LocationRegistry {
    /// Build a registry from an explicit list of locations.
    pub fn new(locations: Vec<Location>) -> Self {
        let keys = locations
            .iter()
            .map(|loc| loc.names().map(normalize_name).collect())
            .collect();
        Self { locations, keys }
    }

    /// Build the registry from the built-in city table.
    pub fn builtin() -> Self {
        Self::new(CITIES.iter().map(Location::from).collect())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All entries in table order.
    pub fn list_available(&self) -> &[Location] {
        &self.locations
    }

    /// Exact lookup by any of a location's names (after normalization).
    pub fn find_by_name(&self, name: &str) -> Result<&Location, GeoError> {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(GeoError::LocationNotFound(name.to_string()));
        }
        self.locations
            .iter()
            .zip(&self.keys)
            .find(|(_, keys)| keys.iter().any(|k| *k == key))
            .map(|(loc, _)| loc)
            .ok_or_else(|| GeoError::LocationNotFound(name.to_string()))
    }

    /// Ranked fuzzy search. Best match first; empty when nothing matches.
    pub fn smart_search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let hits = rank(&self.locations, query);
        tracing::debug!(query, hits = hits.len(), "location smart search");
        hits
    }

    /// Nearest entry by great-circle distance, with the distance in km.
    pub fn find_nearest(&self, longitude: f64, latitude: f64) -> Result<(&Location, f64), GeoError> {
        let target = Coordinates::new(longitude, latitude)?;
        self.locations
            .iter()
            .map(|loc| (loc, haversine_km(loc.coordinates, target)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or(GeoError::EmptyRegistry)
    }
}

static BUILTIN: LazyLock<LocationRegistry> = LazyLock::new(LocationRegistry::builtin);

/// The process-wide built-in registry.
pub fn builtin_registry() -> &'static LocationRegistry {
    &BUILTIN
}

/// Exact lookup in the built-in registry.
pub fn find_city(name: &str) -> Result<&'static Location, GeoError> {
    builtin_registry().find_by_name(name)
}

/// Ranked fuzzy search in the built-in registry.
pub fn smart_search(query: &str) -> Vec<&'static Location> {
    builtin_registry()
        .smart_search(query)
        .into_iter()
        .map(|hit| hit.location)
        .collect()
}

/// Nearest built-in city to a coordinate.
pub fn find_nearest_city(longitude: f64, latitude: f64) -> Result<&'static Location, GeoError> {
    builtin_registry()
        .find_nearest(longitude, latitude)
        .map(|(loc, _)| loc)
}

/// All built-in cities in table order.
pub fn list_available_cities() -> &'static [Location] {
    builtin_registry().list_available()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_all_records() {
        assert_eq!(builtin_registry().len(), CITIES.len());
    }

    #[test]
    fn find_by_kanji_romaji_kana() {
        let reg = builtin_registry();
        assert_eq!(reg.find_by_name("東京").unwrap().romaji, "Tokyo");
        assert_eq!(reg.find_by_name("tokyo").unwrap().name, "東京");
        assert_eq!(reg.find_by_name("トウキョウ").unwrap().name, "東京");
        assert_eq!(reg.find_by_name("東京都").unwrap().name, "東京");
    }

    #[test]
    fn unknown_name_fails() {
        let err = builtin_registry().find_by_name("Atlantis").unwrap_err();
        assert_eq!(err, GeoError::LocationNotFound("Atlantis".to_string()));
    }

    #[test]
    fn empty_name_fails() {
        assert!(builtin_registry().find_by_name("   ").is_err());
    }

    #[test]
    fn nearest_to_tokyo_station() {
        let (loc, d) = builtin_registry().find_nearest(139.7671, 35.6812).unwrap();
        assert_eq!(loc.romaji, "Tokyo");
        assert!(d < 10.0);
    }

    #[test]
    fn empty_registry_nearest_errors() {
        let reg = LocationRegistry::new(Vec::new());
        assert!(reg.is_empty());
        assert_eq!(reg.find_nearest(0.0, 0.0).unwrap_err(), GeoError::EmptyRegistry);
    }
}
