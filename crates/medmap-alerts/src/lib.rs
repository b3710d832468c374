//! # medmap-alerts
//!
//! Bounded, tamper-evident emergency alert log for MedMap Naga.
//!
//! ## Overview
//!
//! SOS requests are sealed into `EmergencyAlert`s carrying a SHA-256
//! reference over their identity fields, then appended to an `AlertLog`.
//! The in-memory log retains the ten newest alerts, evicts oldest-first,
//! and notifies subscribers on every append: an abstract stand-in for
//! whatever storage medium a deployment chooses.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medmap_alerts::{seal_request, InMemoryAlertLog};
//! use medmap_core::traits::AlertLog;
//!
//! let alert = seal_request(&request, location, nearby, Utc::now())?;
//! let log = InMemoryAlertLog::new();
//! log.append(&alert)?;
//!
//! let latest = log.recent(5)?;
//! ```

pub mod memory;
pub mod reference;

pub use memory::{AlertEvent, InMemoryAlertLog, DEFAULT_CAPACITY};
pub use reference::{alert_reference, seal_request, verify_reference};

// ── Tests ─────────────────────────────────────────────────────────────────────
