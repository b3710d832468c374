//! Alert sealing and reference-code primitives.
//!
//! Every emergency alert carries a SHA-256 reference computed over its
//! identity fields. The reference doubles as the code quoted back to the
//! reporter and as a tamper check for the admin view: modifying any sealed
//! field invalidates it.
//!
//! Hash input layout (bytes, in order):
//!   1. alert id as hyphenated UUID UTF-8
//!   2. reported_at as RFC 3339
//!   3. canonical JSON of category
//!   4. resource as UTF-8
//!   5. description as UTF-8
//!   6. contact_number as UTF-8
//!   7. canonical JSON of (location, nearby)

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use medmap_contracts::{
    emergency::{EmergencyAlert, EmergencyRequest, NearbyFacility},
    error::{MedMapError, MedMapResult},
    geo::GeoPoint,
};
use medmap_core::MAX_ALERTED;

/// Compute the SHA-256 reference for an alert's sealed fields.
///
/// Returns a lowercase 64-character hex string.
///
/// # Panics
///
/// Panics if the alert cannot be serialized to JSON, which cannot happen
/// for the well-formed contract types.
pub fn alert_reference(alert: &EmergencyAlert) -> String {
    let category_json = serde_json::to_vec(&alert.category)
        .expect("ResourceCategory must always be serializable to JSON");
    let tail_json = serde_json::to_vec(&(&alert.location, &alert.nearby))
        .expect("alert location and nearby list must always be serializable to JSON");

    let mut hasher = Sha256::new();
    hasher.update(alert.id.to_string().as_bytes());
    hasher.update(
        alert
            .reported_at
            .to_rfc3339_opts(SecondsFormat::Micros, true)
            .as_bytes(),
    );
    hasher.update(&category_json);
    hasher.update(alert.resource.as_bytes());
    hasher.update(alert.description.as_bytes());
    hasher.update(alert.contact_number.as_bytes());
    hasher.update(&tail_json);

    hex::encode(hasher.finalize())
}

/// Recompute the reference and compare it to the stored one.
///
/// `false` means some sealed field was modified after sealing.
pub fn verify_reference(alert: &EmergencyAlert) -> bool {
    alert.reference == alert_reference(alert)
}

/// Validate an SOS intake and seal it into an `EmergencyAlert`.
///
/// The specific resource and the contact number are mandatory
/// (`InvalidRequest` otherwise); the description may be empty. `nearby`
/// is expected nearest-first (as produced by the core selector) and is
/// truncated to the broadcast limit of five.
pub fn seal_request(
    request: &EmergencyRequest,
    location: Option<GeoPoint>,
    mut nearby: Vec<NearbyFacility>,
    reported_at: DateTime<Utc>,
) -> MedMapResult<EmergencyAlert> {
    if request.resource.trim().is_empty() {
        return Err(MedMapError::InvalidRequest {
            reason: "a specific resource must be selected".to_string(),
        });
    }
    if request.contact_number.trim().is_empty() {
        return Err(MedMapError::InvalidRequest {
            reason: "a contact number is required".to_string(),
        });
    }

    nearby.truncate(MAX_ALERTED);

    let mut alert = EmergencyAlert {
        id: Uuid::new_v4(),
        category: request.category,
        resource: request.resource.clone(),
        description: request.description.clone(),
        contact_number: request.contact_number.clone(),
        location,
        reported_at,
        nearby,
        reference: String::new(),
    };
    alert.reference = alert_reference(&alert);

    info!(
        alert_id = %alert.id,
        resource = %alert.resource,
        notified = alert.nearby.len(),
        "emergency alert sealed"
    );

    Ok(alert)
}
