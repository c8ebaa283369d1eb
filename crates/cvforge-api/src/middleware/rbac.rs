//! RBAC route guarding.

use cvforge_auth::{AccessRole, SystemPermission};
use cvforge_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Checks that the caller's role carries the required permission.
///
/// `ctx` is `None` for anonymous requests, which map onto the anonymous
/// access role rather than bypassing the policy table.
pub fn authorize(
    state: &AppState,
    ctx: Option<&RequestContext>,
    permission: SystemPermission,
) -> Result<(), ApiError> {
    let role = ctx
        .map(|c| AccessRole::from(c.role))
        .unwrap_or(AccessRole::Anonymous);
    state.rbac.require_permission(role, &permission)?;
    Ok(())
}
