//! Error types for the MedMap Naga engine.
//!
//! All fallible operations across the workspace return `MedMapResult<T>`.
//! Query evaluation itself never fails: abnormal input (empty query, text
//! matching nothing, a record pointing at an unknown facility) degrades to
//! an empty or reduced result instead. Errors exist only at the edges:
//! configuration, admin gating, alert intake, and the alert log.

use thiserror::Error;

/// The unified error type for the MedMap Naga workspace.
#[derive(Debug, Error)]
pub enum MedMapError {
    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The session lacks the admin capability required for this operation.
    #[error("access denied: {reason}")]
    AccessDenied { reason: String },

    /// The alert log could not persist an emergency alert.
    #[error("alert write failed: {reason}")]
    AlertWriteFailed { reason: String },

    /// An emergency request is missing a mandatory field.
    #[error("invalid emergency request: {reason}")]
    InvalidRequest { reason: String },

    /// A query is already being processed by this session.
    ///
    /// Competing submissions are rejected, never queued, so transcript
    /// entries cannot interleave.
    #[error("a query is already in flight for this session")]
    QueryInFlight,

    /// A stock update referenced an availability record that does not exist
    /// in the snapshot being edited.
    #[error("unknown availability record '{id}'")]
    UnknownRecord { id: String },
}

/// Convenience alias used throughout the MedMap crates.
pub type MedMapResult<T> = Result<T, MedMapError>;
