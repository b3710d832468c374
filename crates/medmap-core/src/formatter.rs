//! Rendering ranked matches into a user-facing message.
//!
//! Pure presentation: a function of its inputs with no side effects. UIs
//! that render structured cards use the ranked list directly and skip this.

use medmap_contracts::query::QueryMatch;

const NOT_FOUND: &str = "I couldn't find any available resources matching your query.\n\n\
Try:\n\
- Checking the spelling\n\
- Using different keywords (e.g. \"blood type O+\", \"hospital beds\", \"amoxicillin\")\n\
- Contacting facilities directly for current availability\n\n\
Would you like to search for something else?";

/// Render `ranked` (at most five entries, already ordered) as prose.
///
/// Zero matches produce the fixed not-found message with suggestions.
/// Otherwise: a count header (singular "facility" for one match), then one
/// block per match listing rank, facility name, resource with distance
/// when known (one decimal place), address, and phone, and a trailing
/// call-ahead tip.
pub fn format_response(ranked: &[QueryMatch]) -> String {
    if ranked.is_empty() {
        return NOT_FOUND.to_string();
    }

    let noun = if ranked.len() == 1 { "facility" } else { "facilities" };
    let mut out = format!(
        "I found {} {} with available resources:\n\n",
        ranked.len(),
        noun
    );

    for (index, item) in ranked.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, item.facility.name));
        match item.distance_km {
            Some(km) => out.push_str(&format!(
                "   {} ({km:.1} km away)\n",
                item.record.resource_name
            )),
            None => out.push_str(&format!("   {}\n", item.record.resource_name)),
        }
        out.push_str(&format!("   {}\n", item.facility.address));
        out.push_str(&format!("   {}\n\n", item.facility.phone));
    }

    out.push_str(
        "Tip: call ahead to confirm availability before visiting.\n\n\
         Would you like more information about any of these facilities?",
    );
    out
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

    fn sample_match(distance_km: Option<f64>) -> QueryMatch {
        QueryMatch {
            record: AvailabilityRecord {
                id: "6-2".to_string(),
                facility_id: FacilityId(6),
                category: ResourceCategory::Medicines,
                resource_id: ResourceId(2),
                resource_name: "Paracetamol 500mg".to_string(),
                status: ResourceStatus::Available,
                stock: 60,
                last_updated: Utc::now(),
            },
            facility: Facility {
                id: FacilityId(6),
                name: "Naga Central Pharmacy".to_string(),
                facility_type: FacilityType::Pharmacy,
                address: "Panganiban Drive, Naga City".to_string(),
                latitude: 13.6175,
                longitude: 123.1825,
                phone: "+63 54 473-5500".to_string(),
                is_public: true,
            },
            distance_km,
        }
    }

    #[test]
    fn zero_matches_render_the_not_found_message() {
        let message = format_response(&[]);
        assert!(message.contains("couldn't find any available resources"));
        assert!(message.contains("Checking the spelling"));
        assert!(message.contains("Contacting facilities directly"));
    }

    #[test]
    fn single_match_uses_singular_facility() {
        let message = format_response(&[sample_match(None)]);
        assert!(message.contains("I found 1 facility"));
        assert!(!message.contains("1 facilities"));
    }

    #[test]
    fn multiple_matches_use_plural_facilities() {
        let message = format_response(&[sample_match(None), sample_match(Some(1.0))]);
        assert!(message.contains("I found 2 facilities"));
    }

    #[test]
    fn block_lists_rank_name_resource_address_phone() {
        let message = format_response(&[sample_match(Some(1.234))]);
        assert!(message.contains("1. Naga Central Pharmacy"));
        assert!(message.contains("Paracetamol 500mg (1.2 km away)"));
        assert!(message.contains("Panganiban Drive, Naga City"));
        assert!(message.contains("+63 54 473-5500"));
        assert!(message.contains("call ahead to confirm availability"));
    }

    #[test]
    fn unknown_distance_omits_the_km_suffix() {
        let message = format_response(&[sample_match(None)]);
        assert!(message.contains("Paracetamol 500mg\n"));
        assert!(!message.contains("km away"));
    }
}
