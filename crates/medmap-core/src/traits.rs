//! Collaborator trait definitions for the MedMap engine.
//!
//! These four traits define the engine's seams:
//!
//! - `SnapshotProvider` — produces availability snapshots on demand
//! - `LocationProvider` — supplies the caller's coordinates, if known
//! - `AlertLog`         — append-only sink for sealed emergency alerts
//! - `AccessPolicy`     — capability predicate guarding the admin side
//!
//! The engine itself owns no data: it borrows an immutable snapshot and the
//! facility catalog for the duration of one query. Refreshing data is an
//! explicit act by the caller through `SnapshotProvider`; nothing inside
//! the matching path regenerates or mutates availability records.

use chrono::{DateTime, Utc};

use medmap_contracts::{
    auth::Session,
    emergency::EmergencyAlert,
    error::MedMapResult,
    geo::GeoPoint,
    resource::AvailabilityRecord,
};

/// A source of availability snapshots.
///
/// Implementations may be random (the synthetic generator), fixed (tests),
/// or backed by a real inventory system. Each call produces a fresh,
/// self-contained snapshot; callers treat the returned vector as immutable
/// and pass it to the engine by reference. The admin edit path publishes a
/// replacement snapshot rather than mutating one in place.
pub trait SnapshotProvider {
    /// Produce a snapshot as of `now`.
    ///
    /// `now` is injected so implementations never read the clock themselves;
    /// generated `last_updated` values are backdated relative to it.
    fn snapshot(&mut self, now: DateTime<Utc>) -> Vec<AvailabilityRecord>;
}

/// The caller's geolocation source.
///
/// Returning `None` models denial, timeout, or an unsupported platform.
/// Every distance-based feature degrades to facility-name ordering when no
/// location is available; nothing ever fails because of it.
pub trait LocationProvider {
    fn locate(&self) -> Option<GeoPoint>;
}

/// Append-only sink for sealed emergency alerts.
///
/// Implementations are bounded: once at capacity, appending evicts the
/// oldest alert. Records handed to `append` are never modified afterwards.
pub trait AlertLog: Send + Sync {
    /// Append one sealed alert.
    fn append(&self, alert: &EmergencyAlert) -> MedMapResult<()>;

    /// Return up to `limit` alerts, newest first.
    fn recent(&self, limit: usize) -> MedMapResult<Vec<EmergencyAlert>>;
}

/// Capability predicate guarding the admin-edit and analytics paths.
///
/// The query engine never consults this; it needs no identity. Only the
/// trusted admin collaborators do, and they treat a `false` answer as a
/// hard denial.
pub trait AccessPolicy: Send + Sync {
    fn is_admin(&self, session: &Session) -> bool;
}
