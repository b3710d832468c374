//! Nearby-facility selection for the SOS flow.
//!
//! Simpler sibling of the matcher/ranker: filters the catalog to the
//! facility kinds that accept emergencies, computes distance from the
//! reporter, flags resource presence, and sorts nearest-first. Broadcast is
//! never resource-gated: facilities lacking the requested resource are
//! still listed and alerted; `has_resource` is informational only.

use std::cmp::Ordering;

use tracing::debug;

use medmap_contracts::{
    emergency::NearbyFacility,
    facility::Facility,
    geo::GeoPoint,
    resource::{AvailabilityRecord, ResourceCategory},
};

use crate::geo::distance_km;

/// How many of the nearest facilities an SOS broadcast notifies.
pub const MAX_ALERTED: usize = 5;

/// Select hospitals and infirmaries ordered by distance from
/// `user_location`.
///
/// When `requested` names a category and specific resource, each entry's
/// `has_resource` reports whether any of that facility's records in the
/// category substring-match the item (record presence, not availability).
/// With no requested resource the flag is `true` for every entry.
///
/// Callers take the first [`MAX_ALERTED`] entries for notification.
pub fn nearby_facilities(
    facilities: &[Facility],
    snapshot: &[AvailabilityRecord],
    user_location: GeoPoint,
    requested: Option<(ResourceCategory, &str)>,
) -> Vec<NearbyFacility> {
    let mut nearby: Vec<NearbyFacility> = facilities
        .iter()
        .filter(|f| f.facility_type.accepts_emergencies())
        .map(|facility| {
            let distance = distance_km(user_location, facility.location());

            let has_resource = match requested {
                Some((category, resource)) => {
                    let wanted = resource.to_lowercase();
                    snapshot.iter().any(|record| {
                        record.facility_id == facility.id
                            && record.category == category
                            && record.resource_name.to_lowercase().contains(&wanted)
                    })
                }
                None => true,
            };

            NearbyFacility {
                facility: facility.clone(),
                distance_km: distance,
                has_resource,
            }
        })
        .collect();

    nearby.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });

    debug!(
        candidates = nearby.len(),
        requested = requested.map(|(_, r)| r).unwrap_or("<none>"),
        "nearby facility selection complete"
    );

    nearby
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use medmap_contracts::{
        facility::{FacilityId, FacilityType},
        resource::{ResourceId, ResourceStatus},
    };

    use super::*;

    fn facility(id: u32, name: &str, kind: FacilityType, lat: f64) -> Facility {
        Facility {
            id: FacilityId(id),
            name: name.to_string(),
            facility_type: kind,
            address: format!("{name}, Naga City"),
            latitude: lat,
            longitude: 123.18,
            phone: "+63 54 473-0000".to_string(),
            is_public: true,
        }
    }

    fn blood_record(facility_id: u32, name: &str) -> AvailabilityRecord {
        AvailabilityRecord {
            id: format!("{facility_id}-blood-1"),
            facility_id: FacilityId(facility_id),
            category: ResourceCategory::Blood,
            resource_id: ResourceId(1),
            resource_name: name.to_string(),
            // Deliberately not Available: presence is what the flag tests.
            status: ResourceStatus::Low,
            stock: 2,
            last_updated: Utc::now(),
        }
    }

    fn catalog() -> Vec<Facility> {
        vec![
            facility(1, "Bicol Medical Center", FacilityType::Hospital, 13.6189),
            facility(2, "Naga City Hospital", FacilityType::Hospital, 13.6290),
            facility(3, "San Antonio Infirmary", FacilityType::Infirmary, 13.6250),
            facility(4, "Triangulo Health Center", FacilityType::HealthCenter, 13.6200),
            facility(6, "Naga Central Pharmacy", FacilityType::Pharmacy, 13.6175),
        ]
    }

    #[test]
    fn only_hospitals_and_infirmaries_are_selected() {
        let nearby = nearby_facilities(&catalog(), &[], GeoPoint::new(13.6192, 123.1814), None);
        assert_eq!(nearby.len(), 3);
        assert!(nearby
            .iter()
            .all(|n| n.facility.facility_type.accepts_emergencies()));
    }

    #[test]
    fn selection_is_sorted_nearest_first() {
        let here = GeoPoint::new(13.6189, 123.18);
        let nearby = nearby_facilities(&catalog(), &[], here, None);

        for pair in nearby.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        assert_eq!(nearby[0].facility.name, "Bicol Medical Center");
    }

    #[test]
    fn facilities_without_the_resource_are_still_listed() {
        // Only Bicol Medical Center stocks O+; everyone is listed anyway.
        let snapshot = vec![blood_record(1, "Blood Type O+")];
        let nearby = nearby_facilities(
            &catalog(),
            &snapshot,
            GeoPoint::new(13.6192, 123.1814),
            Some((ResourceCategory::Blood, "O+")),
        );

        assert_eq!(nearby.len(), 3);
        let bicol = nearby
            .iter()
            .find(|n| n.facility.name == "Bicol Medical Center")
            .unwrap();
        let naga_city = nearby
            .iter()
            .find(|n| n.facility.name == "Naga City Hospital")
            .unwrap();
        assert!(bicol.has_resource);
        assert!(!naga_city.has_resource);
    }

    #[test]
    fn resource_flag_matches_by_substring_within_the_category() {
        let snapshot = vec![blood_record(2, "Blood Type AB+")];
        let nearby = nearby_facilities(
            &catalog(),
            &snapshot,
            GeoPoint::new(13.6192, 123.1814),
            Some((ResourceCategory::Blood, "AB+")),
        );

        let naga_city = nearby
            .iter()
            .find(|n| n.facility.name == "Naga City Hospital")
            .unwrap();
        assert!(naga_city.has_resource);
    }

    #[test]
    fn no_requested_resource_flags_everyone() {
        let nearby = nearby_facilities(&catalog(), &[], GeoPoint::new(13.6192, 123.1814), None);
        assert!(nearby.iter().all(|n| n.has_resource));
    }
}
