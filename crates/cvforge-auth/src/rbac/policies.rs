//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use cvforge_entity::user::UserRole;

/// The role a request acts under.
///
/// Anonymous covers requests without a valid bearer token; they still
/// pass through the RBAC check so that public endpoints are granted
/// explicitly rather than by bypassing the middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRole {
    /// Full system administrator.
    Admin,
    /// A regular registered user.
    User,
    /// No valid token presented.
    Anonymous,
}

impl From<UserRole> for AccessRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::User => Self::User,
        }
    }
}

/// A system-level permission guarding a group of endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemPermission {
    // User management
    /// Create users with an explicit role.
    UserCreate,
    /// Read a single user profile.
    UserRead,
    /// List all users.
    UserList,
    /// Update user details.
    UserUpdate,
    /// Delete users.
    UserDelete,

    // Resume operations
    /// Stage and generate resumes.
    ResumeBuild,
    /// Browse the public resume listing.
    ResumeList,
    /// Delete a resume (ownership checked separately).
    ResumeDelete,

    // Media
    /// Upload avatars and resume photos.
    MediaUpload,

    // System
    /// Access health/status endpoints.
    SystemHealth,
}

/// Defines the mapping from each role to its set of allowed system permissions.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    /// Role → set of permissions.
    policies: HashMap<AccessRole, HashSet<SystemPermission>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let mut policies = HashMap::new();

        // Anonymous: public browsing only
        let mut anonymous = HashSet::new();
        anonymous.insert(SystemPermission::ResumeList);
        anonymous.insert(SystemPermission::SystemHealth);
        policies.insert(AccessRole::Anonymous, anonymous);

        // User: build and manage own resumes, own profile
        let mut user = HashSet::new();
        user.insert(SystemPermission::UserRead);
        user.insert(SystemPermission::UserUpdate);
        user.insert(SystemPermission::ResumeBuild);
        user.insert(SystemPermission::ResumeList);
        user.insert(SystemPermission::ResumeDelete);
        user.insert(SystemPermission::MediaUpload);
        user.insert(SystemPermission::SystemHealth);
        policies.insert(AccessRole::User, user);

        // Admin: everything
        let admin: HashSet<SystemPermission> = vec![
            SystemPermission::UserCreate,
            SystemPermission::UserRead,
            SystemPermission::UserList,
            SystemPermission::UserUpdate,
            SystemPermission::UserDelete,
            SystemPermission::ResumeBuild,
            SystemPermission::ResumeList,
            SystemPermission::ResumeDelete,
            SystemPermission::MediaUpload,
            SystemPermission::SystemHealth,
        ]
        .into_iter()
        .collect();
        policies.insert(AccessRole::Admin, admin);

        Self { policies }
    }

    /// Returns the set of permissions for the given role.
    pub fn permissions_for_role(&self, role: AccessRole) -> HashSet<SystemPermission> {
        self.policies.get(&role).cloned().unwrap_or_default()
    }

    /// Checks whether the given role has the specified permission.
    pub fn has_permission(&self, role: AccessRole, permission: &SystemPermission) -> bool {
        self.policies
            .get(&role)
            .map(|perms| perms.contains(permission))
            .unwrap_or(false)
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_can_only_browse() {
        let policies = RbacPolicies::new();
        assert!(policies.has_permission(AccessRole::Anonymous, &SystemPermission::ResumeList));
        assert!(!policies.has_permission(AccessRole::Anonymous, &SystemPermission::ResumeBuild));
        assert!(!policies.has_permission(AccessRole::Anonymous, &SystemPermission::UserRead));
    }

    #[test]
    fn test_user_cannot_manage_users() {
        let policies = RbacPolicies::new();
        assert!(policies.has_permission(AccessRole::User, &SystemPermission::ResumeBuild));
        assert!(!policies.has_permission(AccessRole::User, &SystemPermission::UserCreate));
        assert!(!policies.has_permission(AccessRole::User, &SystemPermission::UserDelete));
        assert!(!policies.has_permission(AccessRole::User, &SystemPermission::UserList));
    }

    #[test]
    fn test_admin_has_everything_user_has() {
        let policies = RbacPolicies::new();
        for perm in policies.permissions_for_role(AccessRole::User) {
            assert!(policies.has_permission(AccessRole::Admin, &perm));
        }
    }
}
