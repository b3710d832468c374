//! # medmap-core
//!
//! The query engine for MedMap Naga.
//!
//! This crate provides:
//! - The collaborator traits (`SnapshotProvider`, `LocationProvider`,
//!   `AlertLog`, `AccessPolicy`)
//! - The haversine geodistance calculator
//! - The free-text matcher, result ranker, and response formatter, wired
//!   together behind the single [`search`] entry point
//! - The emergency nearby-facility selector for the SOS flow
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medmap_core::search;
//!
//! let outcome = search("o+ blood", &snapshot, &facilities, user_location);
//! println!("{}", outcome.message);
//! ```

pub mod emergency;
pub mod formatter;
pub mod geo;
pub mod matcher;
pub mod ranker;
pub mod search;
pub mod traits;

pub use emergency::{nearby_facilities, MAX_ALERTED};
pub use geo::distance_km;
pub use ranker::MAX_RESULTS;
pub use search::search;
