//! User profile operations and admin user management.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use cvforge_auth::{PasswordHasher, PasswordValidator};
use cvforge_cache::{keys, CacheManager};
use cvforge_core::traits::CacheProvider;
use cvforge_core::types::{PageRequest, PageResponse};
use cvforge_core::{AppError, AppResult};
use cvforge_database::repositories::user::UserRepository;
use cvforge_entity::user::{CreateUser, UpdateUser, User, UserRole};

use crate::context::RequestContext;

/// How long a profile stays in the cache after a read.
const PROFILE_CACHE_TTL: Duration = Duration::from_secs(300);

/// Fields a user may change on their own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub image_url: Option<String>,
}

/// Fields for an admin-created account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password: String,
    pub role: UserRole,
}

/// Handles profile reads and updates, plus admin-only listing and
/// deletion.
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    cache: CacheManager,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        cache: CacheManager,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            cache,
            hasher,
            validator,
        }
    }

    /// Creates an account with an explicit role. Admin only.
    pub async fn create(&self, ctx: &RequestContext, req: CreateAccount) -> AppResult<User> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Only admins may create users"));
        }

        let email = crate::auth::service::normalize_email(&req.email);
        if self.user_repo.email_exists(&email).await? {
            return Err(AppError::conflict("Email is already registered"));
        }
        self.validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                full_name: req.full_name,
                email,
                phone_number: req.phone_number,
                password_hash,
                role: req.role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, created_by = %ctx.user_id, "user created");
        Ok(user)
    }

    /// Gets the current user's profile.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.get_cached(ctx.user_id).await
    }

    /// Gets a user by ID. Users may read themselves; admins anyone.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<User> {
        if !ctx.can_act_on(id) {
            return Err(AppError::forbidden("Cannot view another user's profile"));
        }
        self.get_cached(id).await
    }

    /// Lists all users, paginated. Admin only; enforced by routing
    /// policy, re-checked here.
    pub async fn list(&self, ctx: &RequestContext, page: &PageRequest) -> AppResult<PageResponse<User>> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Only admins may list users"));
        }
        self.user_repo.find_all(page).await
    }

    /// Updates profile fields. Users may update themselves; admins anyone.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        req: UpdateProfile,
    ) -> AppResult<User> {
        if !ctx.can_act_on(id) {
            return Err(AppError::forbidden("Cannot update another user's profile"));
        }
        if let Some(name) = &req.full_name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Full name cannot be empty"));
            }
        }

        let user = self
            .user_repo
            .update(&UpdateUser {
                id,
                full_name: req.full_name,
                phone_number: req.phone_number,
                image_url: req.image_url,
            })
            .await?;
        self.cache.delete(&keys::user_by_id(id)).await?;

        info!(user_id = %id, "profile updated");
        Ok(user)
    }

    /// Changes the current user's password after verifying the old one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !self.hasher.verify_password(current_password, &user.password_hash)? {
            return Err(AppError::unauthorized("Current password is incorrect"));
        }
        self.validator.validate(new_password)?;

        let hash = self.hasher.hash_password(new_password)?;
        self.user_repo.update_password(ctx.user_id, &hash).await?;

        info!(user_id = %ctx.user_id, "password changed");
        Ok(())
    }

    /// Deletes a user account. Admin only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Only admins may delete users"));
        }
        if !self.user_repo.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }
        self.cache.delete(&keys::user_by_id(id)).await?;

        info!(user_id = %id, deleted_by = %ctx.user_id, "user deleted");
        Ok(())
    }

    async fn get_cached(&self, id: Uuid) -> AppResult<User> {
        let key = keys::user_by_id(id);
        if let Some(user) = self.cache.get_json::<User>(&key).await? {
            return Ok(user);
        }
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        self.cache.set_json(&key, &user, PROFILE_CACHE_TTL).await?;
        Ok(user)
    }
}
