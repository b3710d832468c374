//! Great-circle distance via the haversine formula.

use medmap_contracts::geo::GeoPoint;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between two points, by the haversine formula.
///
/// Symmetric, and zero for identical points. NaN inputs propagate; there
/// are no error conditions.
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

// ── Tests ────────────────────────────────────────────────────────────────────
