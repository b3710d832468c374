//! Free-text query matching over an availability snapshot.
//!
//! A record is a candidate when any of three strategies hits AND the record
//! is currently `Available`:
//!
//! 1. **Substring** — the record's resource name (or its facility's name)
//!    contains the query, or the query contains it. Bidirectional, so both
//!    "amox" and "show me amoxicillin 500mg please" find "Amoxicillin
//!    500mg".
//! 2. **Blood-type token** — the query contains one of the eight canonical
//!    tokens (o+, o-, a+, a-, b+, b-, ab+, ab-) and the record is named
//!    exactly "blood type {token}".
//! 3. **Synonym** — a fixed table maps alternate words to a resource
//!    category; a hit matches every record in that category. The oxygen
//!    group routes to the equipment category (oxygen tanks are equipment).
//!
//! All comparison is lowercase. An empty or whitespace-only query matches
//! nothing.

use std::collections::HashMap;

use tracing::debug;

use medmap_contracts::{
    facility::{Facility, FacilityId},
    geo::GeoPoint,
    query::QueryMatch,
    resource::{AvailabilityRecord, ResourceCategory, ResourceStatus},
};

use crate::geo::distance_km;

/// The eight canonical blood-type tokens, lowercase.
pub const BLOOD_TYPE_TOKENS: [&str; 8] = ["o+", "o-", "a+", "a-", "b+", "b-", "ab+", "ab-"];

/// Synonym table: alternate words → the category they refer to.
///
/// The surface string of a group ("oxygen") does not decide the routing;
/// the paired category does.
const SYNONYM_GROUPS: [(ResourceCategory, &[&str]); 4] = [
    (ResourceCategory::Beds, &["bed", "beds", "room", "ward"]),
    (
        ResourceCategory::Medicines,
        &["medicine", "medication", "drug", "pill"],
    ),
    (ResourceCategory::Blood, &["blood", "donation"]),
    (ResourceCategory::Equipment, &["oxygen", "o2", "tank"]),
];

/// Scan `snapshot` for records plausibly relevant to `query`.
///
/// Returns unordered `QueryMatch`es for every `Available` record that hits
/// one of the matching strategies. When `user_location` is known, each
/// match carries the distance to its facility; otherwise `distance_km` is
/// left unset and ranking falls back to name ordering.
///
/// Records whose facility is missing from `facilities` are skipped
/// silently; a data-integrity guard, not an error.
pub fn match_snapshot(
    query: &str,
    snapshot: &[AvailabilityRecord],
    facilities: &[Facility],
    user_location: Option<GeoPoint>,
) -> Vec<QueryMatch> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let by_id: HashMap<FacilityId, &Facility> =
        facilities.iter().map(|f| (f.id, f)).collect();

    let mut matches = Vec::new();

    for record in snapshot {
        let Some(facility) = by_id.get(&record.facility_id) else {
            debug!(
                record_id = %record.id,
                facility_id = record.facility_id.0,
                "record references a facility missing from the catalog, skipping"
            );
            continue;
        };

        let resource_name = record.resource_name.to_lowercase();
        let facility_name = facility.name.to_lowercase();

        let resource_hit =
            resource_name.contains(&needle) || needle.contains(&resource_name);
        let facility_hit =
            facility_name.contains(&needle) || needle.contains(&facility_name);

        let blood_hit = BLOOD_TYPE_TOKENS.iter().any(|token| {
            needle.contains(token) && resource_name == format!("blood type {token}")
        });

        let synonym_hit = SYNONYM_GROUPS.iter().any(|(category, words)| {
            record.category == *category && words.iter().any(|word| needle.contains(word))
        });

        if (resource_hit || facility_hit || blood_hit || synonym_hit)
            && record.status == ResourceStatus::Available
        {
            let distance = user_location.map(|from| distance_km(from, facility.location()));
            matches.push(QueryMatch {
                record: record.clone(),
                facility: (*facility).clone(),
                distance_km: distance,
            });
        }
    }

    debug!(
        query = %needle,
        scanned = snapshot.len(),
        matched = matches.len(),
        "query matching complete"
    );

    matches
}

// ── Tests ────────────────────────────────────────────────────────────────────
