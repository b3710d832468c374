//! Geographic primitives.
//!
//! MedMap only ever deals in WGS-84 decimal degrees. Distance computation
//! lives in `medmap-core::geo`; this module is data only.

use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, degrees north.
    pub lat: f64,
    /// Longitude, degrees east.
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The Naga City centroid, used as the fallback location whenever the
/// caller's geolocation source fails, is denied, or is unsupported.
pub const NAGA_CITY_CENTROID: GeoPoint = GeoPoint {
    lat: 13.6192,
    lon: 123.1814,
};
