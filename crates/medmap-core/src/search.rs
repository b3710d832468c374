//! The single search entry point shared by every UI surface.
//!
//! Matcher → ranker → formatter in one call. The chat page, the popup
//! widget, and the dashboard's emergency mode all route through here, so
//! there is exactly one copy of the matching logic in the system.

use tracing::debug;

use medmap_contracts::{
    facility::Facility,
    geo::GeoPoint,
    query::SearchOutcome,
    resource::AvailabilityRecord,
};

use crate::{formatter, matcher, ranker};

/// Evaluate `query` against `snapshot` and return the ranked matches plus
/// the rendered message.
///
/// `user_location` may be `None` at any time (geolocation denied, timed
/// out, or unsupported); ranking then falls back to facility-name order
/// and the message omits distances.
pub fn search(
    query: &str,
    snapshot: &[AvailabilityRecord],
    facilities: &[Facility],
    user_location: Option<GeoPoint>,
) -> SearchOutcome {
    let matches = matcher::match_snapshot(query, snapshot, facilities, user_location);
    let ranked = ranker::rank(matches);
    let message = formatter::format_response(&ranked);

    debug!(query, results = ranked.len(), "search complete");

    SearchOutcome {
        matches: ranked,
        message,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
