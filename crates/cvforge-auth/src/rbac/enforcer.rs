//! RBAC enforcement logic — checks whether a role has a required system permission.

use cvforge_core::error::AppError;

use super::policies::{AccessRole, RbacPolicies, SystemPermission};

/// Enforces role-based access control for system-level operations.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    /// The policy configuration.
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Creates an enforcer with custom policies.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Checks whether the given role has the required permission.
    ///
    /// Anonymous callers get an unauthorized error so that clients know
    /// to authenticate; authenticated callers without the permission get
    /// a forbidden error.
    pub fn require_permission(
        &self,
        role: AccessRole,
        permission: &SystemPermission,
    ) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            return Ok(());
        }
        match role {
            AccessRole::Anonymous => Err(AppError::unauthorized("Authentication required")),
            _ => Err(AppError::forbidden(format!(
                "Role '{role:?}' does not have permission '{permission:?}'"
            ))),
        }
    }

    /// Checks whether the role has the required permission (returns bool).
    pub fn has_permission(&self, role: AccessRole, permission: &SystemPermission) -> bool {
        self.policies.has_permission(role, permission)
    }

    /// Returns a reference to the underlying policies.
    pub fn policies(&self) -> &RbacPolicies {
        &self.policies
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvforge_core::error::ErrorKind;

    #[test]
    fn test_anonymous_denial_is_unauthorized() {
        let enforcer = RbacEnforcer::new();
        let err = enforcer
            .require_permission(AccessRole::Anonymous, &SystemPermission::ResumeBuild)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_user_denial_is_forbidden() {
        let enforcer = RbacEnforcer::new();
        let err = enforcer
            .require_permission(AccessRole::User, &SystemPermission::UserDelete)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_admin_allowed() {
        let enforcer = RbacEnforcer::new();
        assert!(enforcer
            .require_permission(AccessRole::Admin, &SystemPermission::UserDelete)
            .is_ok());
    }
}
