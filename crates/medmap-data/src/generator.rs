//! Synthetic availability snapshot generator.
//!
//! Randomness is explicit and injectable: the generator owns a seedable
//! `StdRng` and is invoked by the caller at a defined refresh point through
//! the `SnapshotProvider` seam. Nothing in the matching path ever touches
//! it, and a given seed reproduces the exact same snapshot.
//!
//! Per record the generator draws a stock band (full / low / empty) with
//! equal probability, then draws stock within the band and DERIVES status
//! from stock via the shared threshold rule, so generated records can never
//! contradict the admin edit path.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use medmap_contracts::{
    facility::Facility,
    resource::{
        status_for_stock, AvailabilityRecord, ResourceCategory, ResourceDefinition,
    },
};
use medmap_core::traits::SnapshotProvider;

use crate::catalog;

/// Seedable snapshot generator over the static catalogs.
pub struct SyntheticAvailability {
    rng: StdRng,
}

impl SyntheticAvailability {
    /// Deterministic generator: the same seed yields the same snapshots in
    /// the same order.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// OS-entropy generator for interactive use.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn push_records(
        &mut self,
        out: &mut Vec<AvailabilityRecord>,
        facility: &Facility,
        definitions: &[ResourceDefinition],
        category: ResourceCategory,
        now: DateTime<Utc>,
    ) {
        for def in definitions {
            let stock = self.draw_stock(category);
            let status = status_for_stock(stock, category.default_low_stock_threshold());

            // Composite id and display name in the catalog's original format.
            let (id, resource_name) = match category {
                ResourceCategory::Medicines => {
                    (format!("{}-{}", facility.id.0, def.id.0), def.name.clone())
                }
                ResourceCategory::Blood => (
                    format!("{}-blood-{}", facility.id.0, def.id.0),
                    format!("Blood Type {}", def.name),
                ),
                ResourceCategory::Beds => {
                    (format!("{}-bed-{}", facility.id.0, def.id.0), def.name.clone())
                }
                ResourceCategory::Equipment => {
                    (format!("{}-eq-{}", facility.id.0, def.id.0), def.name.clone())
                }
            };

            out.push(AvailabilityRecord {
                id,
                facility_id: facility.id,
                category,
                resource_id: def.id,
                resource_name,
                status,
                stock,
                last_updated: self.backdate(now, category),
            });
        }
    }

    /// Draw a stock level: full band, low band, or empty, equally likely.
    ///
    /// Band ranges straddle the category threshold exactly, so the derived
    /// status covers all three values.
    fn draw_stock(&mut self, category: ResourceCategory) -> u32 {
        let (full, low) = match category {
            ResourceCategory::Medicines => (50..=149u32, 1..=20u32),
            ResourceCategory::Blood => (20..=69, 1..=10),
            ResourceCategory::Beds => (10..=39, 1..=5),
            ResourceCategory::Equipment => (10..=34, 1..=5),
        };

        match self.rng.gen_range(0..3u8) {
            0 => self.rng.gen_range(full),
            1 => self.rng.gen_range(low),
            _ => 0,
        }
    }

    /// A timestamp within the category's freshness window behind `now`.
    fn backdate(&mut self, now: DateTime<Utc>, category: ResourceCategory) -> DateTime<Utc> {
        let window_hours: i64 = match category {
            ResourceCategory::Medicines => 24,
            ResourceCategory::Blood => 12,
            ResourceCategory::Beds => 6,
            ResourceCategory::Equipment => 8,
        };
        let offset = self.rng.gen_range(0..window_hours * 3600);
        now - Duration::seconds(offset)
    }
}

impl SnapshotProvider for SyntheticAvailability {
    /// Cross-join the facility catalog with the resource catalogs.
    ///
    /// Every facility gets medicine records; hospitals and infirmaries
    /// additionally get blood and bed records; hospitals alone get
    /// equipment records.
    fn snapshot(&mut self, now: DateTime<Utc>) -> Vec<AvailabilityRecord> {
        let facilities = catalog::facilities();
        let medicines = catalog::medicines();
        let blood = catalog::blood_types();
        let beds = catalog::bed_types();
        let equipment = catalog::equipment();

        let mut records = Vec::new();
        for facility in &facilities {
            self.push_records(&mut records, facility, &medicines, ResourceCategory::Medicines, now);

            if facility.facility_type.accepts_emergencies() {
                self.push_records(&mut records, facility, &blood, ResourceCategory::Blood, now);
                self.push_records(&mut records, facility, &beds, ResourceCategory::Beds, now);
            }

            if facility.facility_type == medmap_contracts::facility::FacilityType::Hospital {
                self.push_records(
                    &mut records,
                    facility,
                    &equipment,
                    ResourceCategory::Equipment,
                    now,
                );
            }
        }

        debug!(records = records.len(), "availability snapshot generated");
        records
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use medmap_contracts::facility::FacilityType;
    use medmap_contracts::resource::ResourceStatus;

    use super::*;

    fn snapshot(seed: u64) -> Vec<AvailabilityRecord> {
        SyntheticAvailability::from_seed(seed).snapshot(Utc::now())
    }

    #[test]
    fn catalog_cross_join_produces_105_records() {
        // 8 facilities × 8 medicines, plus blood (8) and beds (3) for the
        // two hospitals and one infirmary, plus equipment (4) for the two
        // hospitals: 64 + 33 + 8 = 105.
        assert_eq!(snapshot(7).len(), 105);
    }

    #[test]
    fn record_counts_follow_facility_type() {
        let records = snapshot(7);
        let facilities = catalog::facilities();

        for facility in &facilities {
            let count = records.iter().filter(|r| r.facility_id == facility.id).count();
            let expected = match facility.facility_type {
                FacilityType::Hospital => 8 + 8 + 3 + 4,
                FacilityType::Infirmary => 8 + 8 + 3,
                FacilityType::HealthCenter | FacilityType::Pharmacy => 8,
            };
            assert_eq!(count, expected, "wrong count for {}", facility.name);
        }
    }

    #[test]
    fn status_is_always_consistent_with_stock() {
        for record in snapshot(42) {
            let threshold = record.category.default_low_stock_threshold();
            assert_eq!(
                record.status,
                status_for_stock(record.stock, threshold),
                "inconsistent record {}",
                record.id
            );
            if record.status == ResourceStatus::Available {
                assert!(record.stock > threshold);
            }
            if record.status == ResourceStatus::OutOfStock {
                assert_eq!(record.stock, 0);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_snapshot() {
        let now = Utc::now();
        let a = SyntheticAvailability::from_seed(99).snapshot(now);
        let b = SyntheticAvailability::from_seed(99).snapshot(now);
        assert_eq!(a, b);
    }

    #[test]
    fn blood_records_use_the_display_name() {
        let records = snapshot(7);
        let blood_names: Vec<&str> = records
            .iter()
            .filter(|r| r.category == ResourceCategory::Blood)
            .map(|r| r.resource_name.as_str())
            .collect();

        assert!(!blood_names.is_empty());
        assert!(blood_names.iter().all(|n| n.starts_with("Blood Type ")));
    }

    #[test]
    fn last_updated_never_postdates_now() {
        let now = Utc::now();
        let records = SyntheticAvailability::from_seed(7).snapshot(now);
        assert!(records.iter().all(|r| r.last_updated <= now));
    }
}
