//! Authentication extractors: bearer token to request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use cvforge_core::error::AppError;
use cvforge_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context. Rejects requests without a
/// valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Like [`AuthUser`] but tolerates a missing Authorization header, for
/// routes open to anonymous callers. A present-but-invalid token is
/// still rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<RequestContext>);

fn context_from_parts(parts: &Parts, state: &AppState) -> Result<Option<RequestContext>, AppError> {
    let Some(header) = parts.headers.get("authorization").and_then(|v| v.to_str().ok()) else {
        return Ok(None);
    };
    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

    let claims = state.jwt_decoder.decode_access_token(token)?;
    Ok(Some(RequestContext::new(
        claims.user_id(),
        claims.role,
        claims.email,
    )))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match context_from_parts(parts, state)? {
            Some(ctx) => Ok(AuthUser(ctx)),
            None => Err(AppError::unauthorized("Missing Authorization header").into()),
        }
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(context_from_parts(parts, state)?))
    }
}
