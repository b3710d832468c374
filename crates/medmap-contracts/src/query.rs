//! Query result types.
//!
//! `QueryMatch` is ephemeral: produced by the matcher, ordered by the
//! ranker, rendered by the formatter, never persisted. `SearchOutcome`
//! carries both the ranked structured list (for card-style UIs) and the
//! formatted prose (for chat surfaces).

use serde::{Deserialize, Serialize};

use crate::facility::Facility;
use crate::resource::AvailabilityRecord;

/// A single availability record that matched a query, joined with its
/// facility and, when the caller's location is known, the distance to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMatch {
    pub record: AvailabilityRecord,
    pub facility: Facility,
    /// Kilometers from the caller's location to the facility.
    /// `None` when no location is known; ranking then falls back to
    /// facility name ordering.
    pub distance_km: Option<f64>,
}

/// The full result of one search: the ranked matches (at most five) plus
/// the user-facing message rendered from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub matches: Vec<QueryMatch>,
    pub message: String,
}
