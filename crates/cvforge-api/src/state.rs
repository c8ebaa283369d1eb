//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use cvforge_auth::{JwtDecoder, RbacEnforcer};
use cvforge_cache::CacheManager;
use cvforge_core::config::AppConfig;
use cvforge_core::traits::ObjectStore;
use cvforge_service::{AuthService, MediaService, ResumeService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every handler via the `State` extractor. All fields are
/// cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks).
    pub db_pool: PgPool,
    /// Cache manager (Redis or in-memory).
    pub cache: CacheManager,
    /// Object storage backend (health checks).
    pub store: Arc<dyn ObjectStore>,
    /// Access token decoder.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Role-based access control enforcer.
    pub rbac: Arc<RbacEnforcer>,
    /// Registration, login, password recovery.
    pub auth_service: Arc<AuthService>,
    /// Profile and admin user management.
    pub user_service: Arc<UserService>,
    /// Resume staging and generation.
    pub resume_service: Arc<ResumeService>,
    /// Image uploads.
    pub media_service: Arc<MediaService>,
}
