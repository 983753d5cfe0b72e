//! Unified error type for the convenience API.

use shichu_base::SajuError;
use shichu_config::ConfigError;
use shichu_geo::GeoError;
use shichu_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShichuError {
    #[error(transparent)]
    Geo(#[from] GeoError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Saju(#[from] SajuError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Flat classification of a [`ShichuError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AmbiguousLocation,
    LocationNotFound,
    InvalidCoordinates,
    InvalidDateRange,
    UnknownTimeZone,
    IncompleteRuleMatch,
    Config,
    Other,
}

fn geo_kind(e: &GeoError) -> ErrorKind {
    match e {
        GeoError::LocationNotFound(_) => ErrorKind::LocationNotFound,
        GeoError::InvalidCoordinates(_) => ErrorKind::InvalidCoordinates,
        _ => ErrorKind::Other,
    }
}

fn time_kind(e: &TimeError) -> ErrorKind {
    match e {
        TimeError::AmbiguousLocation { .. } => ErrorKind::AmbiguousLocation,
        TimeError::InvalidDateRange(_) => ErrorKind::InvalidDateRange,
        TimeError::UnknownTimeZone(_) => ErrorKind::UnknownTimeZone,
        TimeError::Geo(g) => geo_kind(g),
        _ => ErrorKind::Other,
    }
}

impl ShichuError {
    /// The underlying failure, whichever layer raised it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geo(e) => geo_kind(e),
            Self::Time(e) => time_kind(e),
            Self::Saju(SajuError::IncompleteRuleMatch(_)) => ErrorKind::IncompleteRuleMatch,
            Self::Saju(SajuError::Time(e)) => time_kind(e),
            Self::Saju(_) => ErrorKind::Other,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}
