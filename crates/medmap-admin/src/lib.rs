//! # medmap-admin
//!
//! The trusted admin side of MedMap Naga.
//!
//! ## Overview
//!
//! This crate provides everything behind the admin capability gate:
//!
//! - [`RoleAccessPolicy`] and [`require_admin`] — the capability check
//! - [`StockPolicy`] — TOML-configurable low-stock thresholds, the single
//!   authority for deriving status from stock on the edit path
//! - [`apply_stock_update`] — immutable-snapshot stock edits
//! - [`low_stock_report`] — threshold scan joined with facility info
//! - [`analytics_report`] — gated chart series plus a live stock summary
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medmap_admin::{require_admin, RoleAccessPolicy, StockPolicy};
//!
//! let policy = StockPolicy::from_file(Path::new("policies/thresholds.toml"))?;
//! require_admin(&RoleAccessPolicy, &session)?;
//! let next = apply_stock_update(&snapshot, "1-2", 0, &policy, Utc::now())?;
//! ```

pub mod access;
pub mod analytics;
pub mod inventory;

pub use access::{require_admin, RoleAccessPolicy, StaffDirectory};
pub use analytics::{analytics_report, stock_summary};
pub use inventory::{apply_stock_update, low_stock_report, LowStockAlert, StockPolicy};
