//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cvforge_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the access token by middleware and passed into
/// service methods so every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// The user's email (convenience field from the claims).
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(user_id: Uuid, role: UserRole, email: String) -> Self {
        Self {
            user_id,
            role,
            email,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Returns whether the current user may act on a resource owned by
    /// `owner_id` (the owner themselves, or any admin).
    pub fn can_act_on(&self, owner_id: Uuid) -> bool {
        self.user_id == owner_id || self.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_can_act_on_any_resource() {
        let ctx = RequestContext::new(Uuid::new_v4(), UserRole::Admin, "admin@example.com".into());
        assert!(ctx.can_act_on(Uuid::new_v4()));
    }

    #[test]
    fn user_can_only_act_on_own_resources() {
        let id = Uuid::new_v4();
        let ctx = RequestContext::new(id, UserRole::User, "user@example.com".into());
        assert!(ctx.can_act_on(id));
        assert!(!ctx.can_act_on(Uuid::new_v4()));
    }
}
