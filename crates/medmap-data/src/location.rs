//! Stand-in geolocation sources.
//!
//! Real deployments would wrap a browser/device geolocation API here. The
//! stand-ins model its two observable outcomes: a fix, or nothing.

use medmap_contracts::geo::{GeoPoint, NAGA_CITY_CENTROID};
use medmap_core::traits::LocationProvider;

/// Always reports the given coordinates.
pub struct FixedLocation(pub GeoPoint);

impl FixedLocation {
    /// The conventional fallback: the Naga City centroid, used when the
    /// real source fails, is denied, or is unsupported.
    pub fn city_centroid() -> Self {
        Self(NAGA_CITY_CENTROID)
    }
}

impl LocationProvider for FixedLocation {
    fn locate(&self) -> Option<GeoPoint> {
        Some(self.0)
    }
}

/// Never reports a location. Distance-based features degrade to
/// facility-name ordering.
pub struct UnknownLocation;

impl LocationProvider for UnknownLocation {
    fn locate(&self) -> Option<GeoPoint> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_location_reports_its_point() {
        let provider = FixedLocation::city_centroid();
        let point = provider.locate().unwrap();
        assert_eq!(point.lat, 13.6192);
        assert_eq!(point.lon, 123.1814);
    }

    #[test]
    fn unknown_location_reports_none() {
        assert!(UnknownLocation.locate().is_none());
    }
}
