//! Admin-gated analytics assembly.
//!
//! The chart series come from the data layer; the stock summary is
//! computed here from the live snapshot, so it always reflects what the
//! dashboard is actually showing.

use medmap_contracts::{
    analytics::{AnalyticsReport, AnalyticsSeries, CategoryStockSummary},
    auth::Session,
    error::MedMapResult,
    resource::{AvailabilityRecord, ResourceCategory, ResourceStatus},
};
use medmap_core::traits::AccessPolicy;

use crate::access::require_admin;

/// Count records per status for each resource category.
pub fn stock_summary(snapshot: &[AvailabilityRecord]) -> Vec<CategoryStockSummary> {
    ResourceCategory::ALL
        .iter()
        .map(|&category| {
            let mut summary = CategoryStockSummary {
                category,
                available: 0,
                low: 0,
                out_of_stock: 0,
            };
            for record in snapshot.iter().filter(|r| r.category == category) {
                match record.status {
                    ResourceStatus::Available => summary.available += 1,
                    ResourceStatus::Low => summary.low += 1,
                    ResourceStatus::OutOfStock => summary.out_of_stock += 1,
                }
            }
            summary
        })
        .collect()
}

/// Assemble the analytics report for an admin session.
///
/// `AccessDenied` for non-admin sessions; the series and snapshot are
/// never touched in that case.
pub fn analytics_report(
    session: &Session,
    access: &dyn AccessPolicy,
    snapshot: &[AvailabilityRecord],
    series: AnalyticsSeries,
) -> MedMapResult<AnalyticsReport> {
    require_admin(access, session)?;

    Ok(AnalyticsReport {
        stock_summary: stock_summary(snapshot),
        series,
    })
}

// ── Tests ────────────────────────────────────────────────────────────────────
