//! Synthetic analytics series generator.
//!
//! Stands in for a real query-log aggregation pipeline. The search
//! frequency leaderboard is a fixed reference list; utilization and hourly
//! demand are drawn from the generator's seedable RNG.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use medmap_contracts::analytics::{
    AnalyticsSeries, FacilityUtilization, HourlyDemand, SearchFrequency,
};

use crate::catalog;

/// The reference search-frequency leaderboard.
pub fn search_frequency() -> Vec<SearchFrequency> {
    [
        ("Amoxicillin 500mg", 342),
        ("Paracetamol 500mg", 289),
        ("ER Beds", 156),
        ("Blood Type O+", 134),
        ("Oxygen Tanks", 98),
        ("Ward Beds", 87),
        ("Salbutamol Inhaler", 76),
        ("Blood Type A+", 65),
    ]
    .iter()
    .map(|(resource, searches)| SearchFrequency {
        resource: resource.to_string(),
        searches: *searches,
    })
    .collect()
}

/// Seedable generator for the randomized analytics series.
pub struct SyntheticAnalytics {
    rng: StdRng,
}

impl SyntheticAnalytics {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Produce the full chart series as of `now`.
    pub fn series(&mut self, now: DateTime<Utc>) -> AnalyticsSeries {
        let facility_utilization = catalog::facilities()
            .iter()
            .map(|facility| FacilityUtilization {
                facility: facility.name.clone(),
                searches: self.rng.gen_range(50..=249),
                last_updated: now - Duration::seconds(self.rng.gen_range(0..7 * 24 * 3600)),
            })
            .collect();

        let demand_by_hour = (0u8..24)
            .map(|hour| HourlyDemand {
                hour,
                demand: self.rng.gen_range(10..=59),
            })
            .collect();

        AnalyticsSeries {
            search_frequency: search_frequency(),
            facility_utilization,
            demand_by_hour,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_covers_every_facility_and_hour() {
        let series = SyntheticAnalytics::from_seed(1).series(Utc::now());
        assert_eq!(series.facility_utilization.len(), 8);
        assert_eq!(series.demand_by_hour.len(), 24);
        assert_eq!(series.search_frequency.len(), 8);
    }

    #[test]
    fn hourly_demand_is_labeled_zero_to_twenty_three() {
        let series = SyntheticAnalytics::from_seed(1).series(Utc::now());
        let hours: Vec<u8> = series.demand_by_hour.iter().map(|d| d.hour).collect();
        assert_eq!(hours, (0u8..24).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_reproduces_the_series() {
        let now = Utc::now();
        let a = SyntheticAnalytics::from_seed(5).series(now);
        let b = SyntheticAnalytics::from_seed(5).series(now);
        assert_eq!(a, b);
    }

    #[test]
    fn leaderboard_is_sorted_by_search_count() {
        let leaderboard = search_frequency();
        for pair in leaderboard.windows(2) {
            assert!(pair[0].searches >= pair[1].searches);
        }
    }
}
