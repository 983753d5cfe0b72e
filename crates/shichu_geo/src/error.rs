//! Error types for location lookup.

use thiserror::Error;

/// Errors from registry lookup or coordinate validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GeoError {
    /// No registry entry matches the given name.
    #[error("location not found: {0}")]
    LocationNotFound(String),
    /// Latitude/longitude outside the valid range.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(&'static str),
    /// The registry holds no entries.
    #[error("location registry is empty")]
    EmptyRegistry,
}
