//! Birth-place reference data for the Four Pillars engine.
//!
//! This crate provides:
//! - `Location` / `Coordinates` value types
//! - A read-only registry of Japanese prefectural capitals and major world cities
//! - Exact name lookup, ranked fuzzy search across kanji, kana and romaji
//! - Nearest-city search by great-circle distance
//!
//! The built-in registry is initialised once on first use and never mutated.

pub mod cities;
pub mod distance;
pub mod error;
pub mod location;
pub mod registry;
pub mod search;

pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use error::GeoError;
pub use location::{Coordinates, Location};
pub use registry::{
    LocationRegistry, builtin_registry, find_city, find_nearest_city, list_available_cities,
    smart_search,
};
pub use search::{MatchKind, SearchHit, normalize_name};
