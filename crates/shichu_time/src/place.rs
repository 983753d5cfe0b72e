//! Resolution of a caller's birthplace input to a concrete [`Location`].

use serde::{Deserialize, Serialize};
use shichu_geo::{Coordinates, Location, LocationRegistry};

use crate::error::TimeError;
use crate::zone::timezone_identifier_in;

/// Candidates listed in an ambiguity error.
const MAX_CANDIDATES: usize = 10;

/// How the caller identifies the birthplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceInput {
    /// A place name to resolve against the registry.
    Name(String),
    /// A place name, falling back to the coordinates when the name does not
    /// resolve to a single registry entry.
    NameWithCoordinates {
        name: String,
        coordinates: Coordinates,
    },
    /// Bare coordinates; the zone comes from the nearest registry city.
    Coordinates(Coordinates),
    /// A fully specified location used as-is.
    Extended(Location),
}

impl From<&str> for PlaceInput {
    fn from(name: &str) -> Self {
        PlaceInput::Name(name.to_string())
    }
}

impl From<Coordinates> for PlaceInput {
    fn from(c: Coordinates) -> Self {
        PlaceInput::Coordinates(c)
    }
}

impl From<Location> for PlaceInput {
    fn from(l: Location) -> Self {
        PlaceInput::Extended(l)
    }
}

/// Resolve a name: exact match, else a single best fuzzy hit.
fn resolve_name(registry: &LocationRegistry, name: &str) -> Result<Location, TimeError> {
    if let Ok(loc) = registry.find_by_name(name) {
        return Ok(loc.clone());
    }
    let hits = registry.smart_search(name);
    match hits.as_slice() {
        [only] => Ok(only.location.clone()),
        [best, second, ..] if best.outranks(second) => Ok(best.location.clone()),
        _ => Err(TimeError::AmbiguousLocation {
            query: name.to_string(),
            candidates: hits
                .iter()
                .take(MAX_CANDIDATES)
                .map(|h| h.location.name.clone())
                .collect(),
        }),
    }
}

fn from_coordinates(registry: &LocationRegistry, c: Coordinates) -> Result<Location, TimeError> {
    let c = Coordinates::new(c.longitude, c.latitude)?;
    let zone = timezone_identifier_in(registry, c.latitude, c.longitude)?;
    Ok(Location::from_coordinates(c, zone))
}

/// Resolve a birthplace input to a location.
pub fn resolve_place(
    registry: &LocationRegistry,
    input: &PlaceInput,
) -> Result<Location, TimeError> {
    let location = match input {
        PlaceInput::Name(name) => resolve_name(registry, name)?,
        PlaceInput::NameWithCoordinates { name, coordinates } => {
            match resolve_name(registry, name) {
                Ok(loc) => loc,
                Err(TimeError::AmbiguousLocation { .. }) => {
                    tracing::debug!(name, "name unresolved, using supplied coordinates");
                    from_coordinates(registry, *coordinates)?
                }
                Err(e) => return Err(e),
            }
        }
        PlaceInput::Coordinates(c) => from_coordinates(registry, *c)?,
        PlaceInput::Extended(loc) => {
            Coordinates::new(loc.coordinates.longitude, loc.coordinates.latitude)?;
            loc.clone()
        }
    };
    tracing::debug!(place = %location.name, zone = %location.time_zone, "place resolved");
    Ok(location)
}
