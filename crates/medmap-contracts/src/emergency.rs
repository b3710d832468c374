//! SOS emergency request and alert types.
//!
//! An `EmergencyRequest` is the raw intake from the SOS form. Sealing it
//! (medmap-alerts) validates the mandatory fields, attaches the reporter's
//! location and the nearest facilities, and stamps it with a SHA-256
//! reference code that makes later tampering detectable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::facility::Facility;
use crate::geo::GeoPoint;
use crate::resource::ResourceCategory;

/// Raw SOS intake, before validation and sealing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyRequest {
    pub category: ResourceCategory,
    /// The specific resource needed, e.g. "O+", "ER Bed", "Oxygen Tank".
    pub resource: String,
    /// Free-text details from the reporter. May be empty.
    pub description: String,
    pub contact_number: String,
}

/// A facility selected for an emergency broadcast.
///
/// `has_resource` is advisory only: facilities without the requested
/// resource are still alerted. The flag reports whether any of the
/// facility's availability records for the requested category
/// substring-match the requested item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyFacility {
    pub facility: Facility,
    pub distance_km: f64,
    pub has_resource: bool,
}

/// A sealed emergency alert, as appended to the alert log and shown on the
/// admin view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyAlert {
    pub id: Uuid,
    pub category: ResourceCategory,
    pub resource: String,
    pub description: String,
    pub contact_number: String,
    /// Where the reporter was, if their location was known at submit time.
    pub location: Option<GeoPoint>,
    pub reported_at: DateTime<Utc>,
    /// Up to five facilities, nearest first, chosen for notification.
    pub nearby: Vec<NearbyFacility>,
    /// SHA-256 (hex) commitment over the alert's identity fields.
    pub reference: String,
}
