//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user in the CV Forge system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name.
    pub full_name: String,
    /// Email address, unique across the system.
    pub email: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Avatar image URL (optional).
    pub image_url: Option<String>,
    /// Argon2 password hash. Never serialized; cache copies carry an
    /// empty string and must not be used for verification.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// The refresh token currently issued to this user, if any.
    #[serde(skip_serializing, default)]
    pub refresh_token: Option<String>,
    /// User role (RBAC).
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: Uuid,
    /// New full name.
    pub full_name: Option<String>,
    /// New phone number.
    pub phone_number: Option<String>,
    /// New avatar image URL.
    pub image_url: Option<String>,
}
