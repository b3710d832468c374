//! Session identity types.
//!
//! Authentication itself is out of scope: a session is whatever identity
//! the hosting application hands us. The query engine never reads it; only
//! the admin-edit and analytics collaborators consult the role, and they do
//! so through the `AccessPolicy` capability predicate rather than by
//! inspecting identity fields directly.

use serde::{Deserialize, Serialize};

/// The role attached to an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Staff,
}

/// An authenticated session, as produced by the hosting application's
/// login flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl Session {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}
