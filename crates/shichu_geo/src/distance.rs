//! Great-circle distance on a spherical Earth.

use crate::location::Coordinates;

/// IUGG mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0088;

/// Haversine distance between two points, in kilometres.
///
/// Numerically stable for small separations and strictly monotonic in the
/// central angle, so it can be used to rank candidates.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let dphi = (b.latitude - a.latitude).to_radians();
    let dlambda = (b.longitude - a.longitude).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    // Clamp guards against h creeping past 1.0 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}
