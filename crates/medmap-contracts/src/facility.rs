//! Health facility types.
//!
//! Facilities are static reference data: the catalog is built once at
//! process start and is immutable for the session. Availability records
//! reference facilities by `FacilityId`.

use serde::{Deserialize, Serialize};

/// Stable numeric identifier for a facility in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacilityId(pub u32);

/// The kind of health facility.
///
/// The kind determines which resource categories a facility stocks:
/// every facility carries medicines; hospitals and infirmaries additionally
/// carry blood and beds; only hospitals carry equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    Hospital,
    Infirmary,
    HealthCenter,
    Pharmacy,
}

impl FacilityType {
    /// True for the facility kinds that receive SOS emergency broadcasts.
    pub fn accepts_emergencies(self) -> bool {
        matches!(self, FacilityType::Hospital | FacilityType::Infirmary)
    }
}

/// A city health facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub facility_type: FacilityType,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: String,
    /// Whether the facility is publicly run. Display-only.
    pub is_public: bool,
}

impl Facility {
    /// The facility's coordinates as a `GeoPoint`.
    pub fn location(&self) -> crate::geo::GeoPoint {
        crate::geo::GeoPoint::new(self.latitude, self.longitude)
    }
}
