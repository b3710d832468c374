//! Admin capability gating.
//!
//! The engine never needs identity; only the stock-edit and analytics
//! paths do, and they ask through the abstract `AccessPolicy` predicate.
//! The hosting application decides what "admin" means; the reference
//! policy here simply reads the session role.

use tracing::warn;

use medmap_contracts::{
    auth::{Session, UserRole},
    error::{MedMapError, MedMapResult},
};
use medmap_core::traits::AccessPolicy;

/// Grants the admin capability to sessions with the `Admin` role.
#[derive(Debug, Default)]
pub struct RoleAccessPolicy;

impl AccessPolicy for RoleAccessPolicy {
    fn is_admin(&self, session: &Session) -> bool {
        session.role == UserRole::Admin
    }
}

/// Gate an admin operation: `AccessDenied` unless `policy` grants the
/// capability to `session`.
pub fn require_admin(policy: &dyn AccessPolicy, session: &Session) -> MedMapResult<()> {
    if policy.is_admin(session) {
        Ok(())
    } else {
        warn!(email = %session.email, "admin operation denied");
        Err(MedMapError::AccessDenied {
            reason: format!("session '{}' lacks the admin capability", session.email),
        })
    }
}

/// The demo staff directory.
///
/// Stands in for a real identity provider: it knows exactly two accounts
/// and maps them to roles. Anything else fails to log in.
#[derive(Debug, Default)]
pub struct StaffDirectory;

impl StaffDirectory {
    pub fn login(&self, email: &str) -> Option<Session> {
        match email {
            "admin@naga.gov.ph" => Some(Session::new("Admin User", email, UserRole::Admin)),
            "staff@naga.gov.ph" => Some(Session::new("Staff User", email, UserRole::Staff)),
            _ => None,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_passes_the_gate() {
        let session = Session::new("Admin User", "admin@naga.gov.ph", UserRole::Admin);
        assert!(require_admin(&RoleAccessPolicy, &session).is_ok());
    }

    #[test]
    fn staff_role_is_denied() {
        let session = Session::new("Staff User", "staff@naga.gov.ph", UserRole::Staff);
        let result = require_admin(&RoleAccessPolicy, &session);
        assert!(matches!(result, Err(MedMapError::AccessDenied { .. })));
    }

    #[test]
    fn directory_knows_the_two_demo_accounts() {
        let directory = StaffDirectory;
        assert_eq!(
            directory.login("admin@naga.gov.ph").unwrap().role,
            UserRole::Admin
        );
        assert_eq!(
            directory.login("staff@naga.gov.ph").unwrap().role,
            UserRole::Staff
        );
        assert!(directory.login("someone@example.com").is_none());
    }
}
