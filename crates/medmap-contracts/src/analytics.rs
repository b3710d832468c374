//! Aggregated analytics shapes for the admin dashboard.
//!
//! The synthetic series are produced by the data layer; the stock summary
//! is computed from a live snapshot on the admin side. Everything here is
//! anonymized aggregates; no per-user data exists anywhere in the system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::ResourceCategory;

/// How often a resource was searched for over the reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFrequency {
    pub resource: String,
    pub searches: u32,
}

/// Search traffic attributed to one facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityUtilization {
    pub facility: String,
    pub searches: u32,
    pub last_updated: DateTime<Utc>,
}

/// Demand volume for one hour of the day (0–23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyDemand {
    pub hour: u8,
    pub demand: u32,
}

/// The synthetic series backing the analytics charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSeries {
    pub search_frequency: Vec<SearchFrequency>,
    pub facility_utilization: Vec<FacilityUtilization>,
    pub demand_by_hour: Vec<HourlyDemand>,
}

/// Per-status record counts for one resource category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStockSummary {
    pub category: ResourceCategory,
    pub available: u32,
    pub low: u32,
    pub out_of_stock: u32,
}

/// The full admin analytics report: chart series plus a stock summary
/// computed from the current snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub series: AnalyticsSeries,
    pub stock_summary: Vec<CategoryStockSummary>,
}
