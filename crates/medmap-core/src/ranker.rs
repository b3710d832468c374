//! Deterministic ordering and truncation of query matches.
//!
//! One comparator produces a total order across mixed known/unknown
//! distances:
//!
//! - a known distance always precedes an unknown one;
//! - two known distances order ascending;
//! - two unknown distances order by facility name;
//! - residual ties break by facility name, then resource name.
//!
//! The final tie-breaks make ranking a pure function of the match set, so
//! repeated runs over an unchanged snapshot return identical output.

use std::cmp::Ordering;

use tracing::debug;

use medmap_contracts::query::QueryMatch;

/// Maximum number of matches surfaced to the caller.
pub const MAX_RESULTS: usize = 5;

/// Order `matches` by the ranking comparator and truncate to
/// [`MAX_RESULTS`].
pub fn rank(mut matches: Vec<QueryMatch>) -> Vec<QueryMatch> {
    let candidates = matches.len();
    matches.sort_by(compare);
    matches.truncate(MAX_RESULTS);

    debug!(candidates, ranked = matches.len(), "ranking complete");
    matches
}

fn compare(a: &QueryMatch, b: &QueryMatch) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(da), Some(db)) => da
            .partial_cmp(&db)
            .unwrap_or(Ordering::Equal)
            .then_with(|| name_order(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => name_order(a, b),
    }
}

fn name_order(a: &QueryMatch, b: &QueryMatch) -> Ordering {
    a.facility
        .name
        .cmp(&b.facility.name)
        .then_with(|| a.record.resource_name.cmp(&b.record.resource_name))
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use medmap_contracts::{
        facility::{Facility, FacilityId, FacilityType},
        resource::{AvailabilityRecord, ResourceCategory, ResourceId, ResourceStatus},
    };

    use super::*;

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn entry(facility_name: &str, distance_km: Option<f64>) -> QueryMatch {
        QueryMatch {
            record: AvailabilityRecord {
                id: format!("1-{facility_name}"),
                facility_id: FacilityId(1),
                category: ResourceCategory::Medicines,
                resource_id: ResourceId(1),
                resource_name: "Paracetamol 500mg".to_string(),
                status: ResourceStatus::Available,
                stock: 60,
                last_updated: Utc::now(),
            },
            facility: Facility {
                id: FacilityId(1),
                name: facility_name.to_string(),
                facility_type: FacilityType::Pharmacy,
                address: "Naga City".to_string(),
                latitude: 13.62,
                longitude: 123.18,
                phone: "+63 54 473-0000".to_string(),
                is_public: true,
            },
            distance_km,
        }
    }

    // ── Ordering rules ───────────────────────────────────────────────────────

    #[test]
    fn known_distances_order_ascending() {
        let ranked = rank(vec![
            entry("Far Clinic", Some(3.4)),
            entry("Near Clinic", Some(1.2)),
        ]);
        assert_eq!(ranked[0].facility.name, "Near Clinic");
        assert_eq!(ranked[1].facility.name, "Far Clinic");
    }

    #[test]
    fn unknown_distances_order_by_facility_name() {
        let ranked = rank(vec![
            entry("Beta Clinic", None),
            entry("Alpha Clinic", None),
        ]);
        assert_eq!(ranked[0].facility.name, "Alpha Clinic");
        assert_eq!(ranked[1].facility.name, "Beta Clinic");
    }

    #[test]
    fn known_distance_precedes_unknown() {
        // "Alpha Clinic" sorts first by name, but the entry with a measured
        // distance must still win.
        let ranked = rank(vec![
            entry("Alpha Clinic", None),
            entry("Zeta Clinic", Some(9.9)),
        ]);
        assert_eq!(ranked[0].facility.name, "Zeta Clinic");
        assert_eq!(ranked[1].facility.name, "Alpha Clinic");
    }

    #[test]
    fn truncates_to_five_lowest_distances() {
        let matches: Vec<QueryMatch> = (0..8)
            .map(|i| entry(&format!("Clinic {i}"), Some(8.0 - i as f64)))
            .collect();

        let ranked = rank(matches);
        assert_eq!(ranked.len(), MAX_RESULTS);

        // Input distances were 8.0 down to 1.0; the five lowest survive.
        let distances: Vec<f64> = ranked.iter().map(|m| m.distance_km.unwrap()).collect();
        assert_eq!(distances, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let matches = vec![
            entry("Gamma Clinic", Some(2.0)),
            entry("Alpha Clinic", None),
            entry("Beta Clinic", Some(0.5)),
            entry("Delta Clinic", None),
        ];

        let first = rank(matches.clone());
        let second = rank(matches);
        assert_eq!(first, second);
    }
}
