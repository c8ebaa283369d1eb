//! Account lifecycle: code-verified signup, login, refresh rotation,
//! and password recovery.
//!
//! Signups are held in the cache until the emailed code is confirmed;
//! no database row exists for an unverified account.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use cvforge_auth::code::generate_code;
use cvforge_auth::{JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator, TokenPair};
use cvforge_cache::{keys, CacheManager};
use cvforge_core::config::AuthConfig;
use cvforge_core::events::{VerificationCodeEvent, VerificationPurpose};
use cvforge_core::traits::CacheProvider;
use cvforge_core::{AppError, AppResult};
use cvforge_database::repositories::user::UserRepository;
use cvforge_entity::user::{CreateUser, User, UserRole};
use cvforge_notify::Notifier;

/// A signup waiting for its verification code to be confirmed.
///
/// Lives only in the cache; expires with the code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingSignup {
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
    pub code: String,
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password: String,
}

/// Handles registration, login, and password recovery.
#[derive(Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    cache: CacheManager,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
    notifier: Notifier,
    signup_code_ttl: Duration,
    reset_code_ttl: Duration,
}

impl AuthService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<UserRepository>,
        cache: CacheManager,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        notifier: Notifier,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            cache,
            hasher,
            validator,
            encoder,
            decoder,
            notifier,
            signup_code_ttl: Duration::from_secs(config.signup_code_ttl_seconds),
            reset_code_ttl: Duration::from_secs(config.reset_code_ttl_seconds),
        }
    }

    /// Starts a signup: validates input, parks the account in the
    /// cache, and sends a verification code.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<()> {
        self.validator.validate(&req.password)?;

        let email = normalize_email(&req.email);
        if self.user_repo.email_exists(&email).await? {
            return Err(AppError::conflict("Email is already registered"));
        }

        let code = generate_code();
        let pending = PendingSignup {
            full_name: req.full_name,
            email: email.clone(),
            phone_number: req.phone_number,
            password_hash: self.hasher.hash_password(&req.password)?,
            code: code.clone(),
        };
        self.cache
            .set_json(&keys::signup_pending(&email), &pending, self.signup_code_ttl)
            .await?;

        self.notifier
            .verification_code(&VerificationCodeEvent {
                email: email.clone(),
                code,
                purpose: VerificationPurpose::Signup,
                expires_at: Utc::now() + chrono::Duration::seconds(self.signup_code_ttl.as_secs() as i64),
            })
            .await;

        info!(email = %email, "signup pending verification");
        Ok(())
    }

    /// Completes a signup by confirming the verification code, then
    /// creates the account and signs the user in.
    pub async fn verify_signup(&self, email: &str, code: &str) -> AppResult<(User, TokenPair)> {
        let email = normalize_email(email);
        let key = keys::signup_pending(&email);
        let pending: PendingSignup = self
            .cache
            .get_json(&key)
            .await?
            .ok_or_else(|| AppError::not_found("Verification code expired or not requested"))?;

        if pending.code != code {
            return Err(AppError::validation("Invalid verification code"));
        }

        let user = self
            .user_repo
            .create(&CreateUser {
                full_name: pending.full_name,
                email: pending.email,
                phone_number: pending.phone_number,
                password_hash: pending.password_hash,
                role: UserRole::User,
            })
            .await?;
        self.cache.delete(&key).await?;

        let tokens = self.issue_tokens(&user).await?;
        info!(user_id = %user.id, "account verified and created");
        Ok((user, tokens))
    }

    /// Authenticates by email and password.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(User, TokenPair)> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let tokens = self.issue_tokens(&user).await?;
        info!(user_id = %user.id, "user logged in");
        Ok((user, tokens))
    }

    /// Rotates a refresh token: the presented token must match the one
    /// stored for the user, and is replaced by the new pair's.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(User, TokenPair)> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;
        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Unknown user"))?;

        match user.refresh_token.as_deref() {
            Some(stored) if stored == refresh_token => {}
            _ => return Err(AppError::unauthorized("Refresh token has been revoked")),
        }

        let tokens = self.issue_tokens(&user).await?;
        Ok((user, tokens))
    }

    /// Revokes the stored refresh token.
    pub async fn logout(&self, user_id: Uuid) -> AppResult<()> {
        self.user_repo.update_refresh_token(user_id, None).await?;
        info!(user_id = %user_id, "user logged out");
        Ok(())
    }

    /// Starts password recovery by sending a reset code.
    pub async fn forgot_password(&self, email: &str) -> AppResult<()> {
        let email = normalize_email(email);
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found("No account with this email"))?;

        let code = generate_code();
        self.cache
            .set(&keys::reset_code(&email), &code, self.reset_code_ttl)
            .await?;

        self.notifier
            .verification_code(&VerificationCodeEvent {
                email: user.email.clone(),
                code,
                purpose: VerificationPurpose::PasswordReset,
                expires_at: Utc::now() + chrono::Duration::seconds(self.reset_code_ttl.as_secs() as i64),
            })
            .await;

        info!(user_id = %user.id, "password reset code issued");
        Ok(())
    }

    /// Checks a reset code without consuming it, so the client can gate
    /// the new-password form.
    pub async fn verify_reset_code(&self, email: &str, code: &str) -> AppResult<()> {
        self.check_reset_code(&normalize_email(email), code).await
    }

    /// Sets a new password after re-confirming the reset code. Consumes
    /// the code and signs the user in with a fresh pair, replacing any
    /// previously stored refresh token.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> AppResult<(User, TokenPair)> {
        let email = normalize_email(email);
        self.check_reset_code(&email, code).await?;
        self.validator.validate(new_password)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found("No account with this email"))?;

        let hash = self.hasher.hash_password(new_password)?;
        self.user_repo.update_password(user.id, &hash).await?;
        self.cache.delete(&keys::reset_code(&email)).await?;

        let tokens = self.issue_tokens(&user).await?;
        info!(user_id = %user.id, "password reset completed");
        Ok((user, tokens))
    }

    async fn check_reset_code(&self, email: &str, code: &str) -> AppResult<()> {
        let stored = self
            .cache
            .get(&keys::reset_code(email))
            .await?
            .ok_or_else(|| AppError::not_found("Reset code expired or not requested"))?;
        if stored != code {
            return Err(AppError::validation("Invalid reset code"));
        }
        Ok(())
    }

    async fn issue_tokens(&self, user: &User) -> AppResult<TokenPair> {
        let tokens = self.encoder.generate_token_pair(user.id, user.role, &user.email)?;
        self.user_repo
            .update_refresh_token(user.id, Some(&tokens.refresh_token))
            .await?;
        Ok(tokens)
    }
}

/// Canonical form for emails used as lookup and cache keys.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_normalize_to_trimmed_lowercase() {
        assert_eq!(normalize_email("  USER@Example.COM "), "user@example.com");
        assert_eq!(normalize_email("plain@example.com"), "plain@example.com");
    }
}
