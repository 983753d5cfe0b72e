//! Error types for time adjustment and calendrical lookups.

use shichu_geo::GeoError;
use thiserror::Error;

/// Errors from place resolution, time-zone lookup, or calendar range checks.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A place name matched nothing, or several places equally well, and no
    /// coordinates were supplied.
    #[error("ambiguous location '{query}' ({} candidates)", .candidates.len())]
    AmbiguousLocation {
        query: String,
        candidates: Vec<String>,
    },
    /// Date or hour outside the supported calendrical tables.
    #[error("date out of supported range: {0}")]
    InvalidDateRange(String),
    /// Time-zone identifier not present in the offset tables.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
    /// Error from the location registry.
    #[error("location error: {0}")]
    Geo(#[from] GeoError),
}
