//! # medmap-data
//!
//! Static catalogs and synthetic data generators for MedMap Naga.
//!
//! All data here is hardcoded or randomly generated and entirely
//! fictional. This crate acts as the stand-in for a real facility registry,
//! inventory system, query-log pipeline, and geolocation source.
//!
//! Randomness never leaks: generators own a seedable RNG and are invoked
//! explicitly through the `SnapshotProvider` seam, producing immutable
//! snapshots the engine borrows by reference.

pub mod analytics;
pub mod catalog;
pub mod generator;
pub mod location;

pub use analytics::SyntheticAnalytics;
pub use generator::SyntheticAvailability;
pub use location::{FixedLocation, UnknownLocation};
