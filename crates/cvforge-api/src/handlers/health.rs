//! Health check handler.

use axum::extract::State;
use axum::Json;

use cvforge_auth::SystemPermission;
use cvforge_core::traits::CacheProvider;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::error::ApiError;
use crate::extractors::MaybeAuthUser;
use crate::middleware::rbac::authorize;
use crate::state::AppState;

/// GET /health
///
/// Reports per-dependency status; the endpoint itself always answers
/// 200 so load balancers can read the body.
pub async fn health(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    authorize(&state, auth.0.as_ref(), SystemPermission::SystemHealth)?;
    let database = match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => "connected",
        Err(_) => "unavailable",
    };
    let cache = match state.cache.health_check().await {
        Ok(true) => "connected",
        _ => "unavailable",
    };
    let storage = match state.store.health_check().await {
        Ok(true) => "connected",
        _ => "unavailable",
    };

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        cache: cache.to_string(),
        storage: storage.to_string(),
    })))
}
