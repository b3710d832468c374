//! TOML-driven stock threshold policy and the stock-edit path.
//!
//! `StockPolicy` is deserialized from TOML (or defaulted to the citywide
//! table) and is the single authority for deriving a record's status from
//! its stock on the edit path. Updates never mutate a snapshot in place:
//! `apply_stock_update` publishes a replacement vector, so a query running
//! over the old snapshot can never observe a half-applied edit.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use medmap_contracts::{
    error::{MedMapError, MedMapResult},
    facility::Facility,
    resource::{status_for_stock, AvailabilityRecord, ResourceCategory, ResourceStatus},
};

/// Per-category low-stock thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub medicines: u32,
    pub blood: u32,
    pub beds: u32,
    pub equipment: u32,
}

impl Default for Thresholds {
    /// The citywide reference table.
    fn default() -> Self {
        Self {
            medicines: ResourceCategory::Medicines.default_low_stock_threshold(),
            blood: ResourceCategory::Blood.default_low_stock_threshold(),
            beds: ResourceCategory::Beds.default_low_stock_threshold(),
            equipment: ResourceCategory::Equipment.default_low_stock_threshold(),
        }
    }
}

/// The stock policy loaded from a TOML document.
///
/// ```toml
/// [thresholds]
/// medicines = 20
/// blood = 10
/// beds = 5
/// equipment = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPolicy {
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl StockPolicy {
    /// Parse `s` as TOML and build a `StockPolicy`.
    ///
    /// Returns `MedMapError::ConfigError` if the TOML is malformed or does
    /// not match the expected schema.
    pub fn from_toml_str(s: &str) -> MedMapResult<Self> {
        toml::from_str(s).map_err(|e| MedMapError::ConfigError {
            reason: format!("failed to parse stock policy TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as a TOML stock policy.
    pub fn from_file(path: &Path) -> MedMapResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedMapError::ConfigError {
            reason: format!("failed to read stock policy file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The low-stock threshold for `category` under this policy.
    pub fn threshold(&self, category: ResourceCategory) -> u32 {
        match category {
            ResourceCategory::Medicines => self.thresholds.medicines,
            ResourceCategory::Blood => self.thresholds.blood,
            ResourceCategory::Beds => self.thresholds.beds,
            ResourceCategory::Equipment => self.thresholds.equipment,
        }
    }

    /// Derive the status `stock` implies for `category` under this policy.
    pub fn status_for(&self, category: ResourceCategory, stock: u32) -> ResourceStatus {
        status_for_stock(stock, self.threshold(category))
    }
}

/// Apply a stock edit and publish the resulting snapshot.
///
/// The input snapshot is left untouched; the returned vector carries the
/// edited record with its status re-derived from the new stock and its
/// `last_updated` stamped with `updated_at`. Editing a record id absent
/// from the snapshot is `UnknownRecord`.
pub fn apply_stock_update(
    snapshot: &[AvailabilityRecord],
    record_id: &str,
    new_stock: u32,
    policy: &StockPolicy,
    updated_at: DateTime<Utc>,
) -> MedMapResult<Vec<AvailabilityRecord>> {
    if !snapshot.iter().any(|r| r.id == record_id) {
        return Err(MedMapError::UnknownRecord {
            id: record_id.to_string(),
        });
    }

    let next = snapshot
        .iter()
        .map(|record| {
            if record.id != record_id {
                return record.clone();
            }

            let status = policy.status_for(record.category, new_stock);
            info!(
                record_id = %record.id,
                resource = %record.resource_name,
                old_stock = record.stock,
                new_stock,
                new_status = ?status,
                "stock updated"
            );

            AvailabilityRecord {
                stock: new_stock,
                status,
                last_updated: updated_at,
                ..record.clone()
            }
        })
        .collect();

    Ok(next)
}

/// One low-stock finding, joined with its facility for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub record: AvailabilityRecord,
    pub facility: Facility,
}

/// Scan `snapshot` for records at or below their category threshold
/// (including out-of-stock records), joined with facility info.
///
/// Records referencing a facility missing from the catalog are skipped,
/// matching the engine's data-integrity guard.
pub fn low_stock_report(
    snapshot: &[AvailabilityRecord],
    facilities: &[Facility],
    policy: &StockPolicy,
) -> Vec<LowStockAlert> {
    snapshot
        .iter()
        .filter(|record| record.stock <= policy.threshold(record.category))
        .filter_map(|record| {
            let facility = facilities.iter().find(|f| f.id == record.facility_id)?;
            Some(LowStockAlert {
                record: record.clone(),
                facility: facility.clone(),
            })
        })
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────
