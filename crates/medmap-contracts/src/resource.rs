//! Resource taxonomy and availability records.
//!
//! Status is always DERIVED from stock: `status_for_stock` is the single
//! rule shared by the synthetic generator and the admin edit path, so the
//! two can never produce contradictory records (e.g. `available` with
//! stock 0).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::facility::FacilityId;

/// Stable numeric identifier for a resource definition within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub u32);

/// The four resource categories tracked by MedMap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Medicines,
    Blood,
    Beds,
    Equipment,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Medicines,
        ResourceCategory::Blood,
        ResourceCategory::Beds,
        ResourceCategory::Equipment,
    ];

    /// The default low-stock threshold for this category.
    ///
    /// Stock at or below the threshold is `Low`; zero is `OutOfStock`.
    /// Facilities may override these via `StockPolicy` on the admin side.
    pub fn default_low_stock_threshold(self) -> u32 {
        match self {
            ResourceCategory::Blood => 10,
            ResourceCategory::Beds => 5,
            ResourceCategory::Equipment => 5,
            ResourceCategory::Medicines => 20,
        }
    }

    /// Human-readable label used by formatters and the demo surfaces.
    pub fn label(self) -> &'static str {
        match self {
            ResourceCategory::Medicines => "Medicines",
            ResourceCategory::Blood => "Blood Supply",
            ResourceCategory::Beds => "Beds",
            ResourceCategory::Equipment => "Equipment",
        }
    }
}

/// Availability state of one resource at one facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Available,
    Low,
    OutOfStock,
}

/// Derive a status from a stock level and a low-stock threshold.
///
/// Zero stock is `OutOfStock` regardless of threshold.
pub fn status_for_stock(stock: u32, threshold: u32) -> ResourceStatus {
    if stock == 0 {
        ResourceStatus::OutOfStock
    } else if stock <= threshold {
        ResourceStatus::Low
    } else {
        ResourceStatus::Available
    }
}

/// One entry in the static resource catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub id: ResourceId,
    pub name: String,
    pub category: ResourceCategory,
}

/// One (facility, resource) availability tuple within a snapshot.
///
/// The `id` is a composite string in the catalog's original format:
/// `"{facility}-{resource}"` for medicines, `"{facility}-blood-{n}"`,
/// `"{facility}-bed-{n}"`, and `"{facility}-eq-{n}"` for the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub id: String,
    pub facility_id: FacilityId,
    pub category: ResourceCategory,
    pub resource_id: ResourceId,
    pub resource_name: String,
    pub status: ResourceStatus,
    pub stock: u32,
    pub last_updated: DateTime<Utc>,
}
