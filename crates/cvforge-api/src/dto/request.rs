//! Request DTOs with input validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use cvforge_entity::resume::{JobLocation, JobType, ResumeFilter};
use cvforge_entity::user::UserRole;

/// POST /v1/auth/register
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterPayload {
    #[validate(length(min = 1, max = 120, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub phone_number: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// POST /v1/auth/verify
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyPayload {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,
}

/// POST /v1/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /v1/auth/refresh
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshPayload {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// POST /v1/auth/forgot-password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForgotPasswordPayload {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// POST /v1/auth/reset-password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPasswordPayload {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// POST /v1/users (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserPayload {
    #[validate(length(min = 1, max = 120, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub phone_number: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub role: UserRole,
}

/// PUT /v1/users/me and PUT /v1/users/{id}
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfilePayload {
    #[validate(length(min = 1, max = 120, message = "Full name cannot be empty"))]
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
}

/// PUT /v1/users/me/password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordPayload {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// POST /v1/resumes/generate
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateResumePayload {
    pub basic_key: Uuid,
    pub main_key: Uuid,
    #[validate(length(min = 1, message = "Template is required"))]
    pub template: String,
    /// Label language; defaults to English.
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

/// Query string filters for GET /v1/resumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeFilterQuery {
    pub job_title: Option<String>,
    pub job_location: Option<JobLocation>,
    pub job_type: Option<JobType>,
    pub min_salary: Option<i64>,
    pub region: Option<String>,
    pub min_experience: Option<i32>,
}

impl ResumeFilterQuery {
    pub fn into_filter(self) -> ResumeFilter {
        ResumeFilter {
            job_title: self.job_title,
            job_location: self.job_location,
            job_type: self.job_type,
            min_salary: self.min_salary,
            region: self.region,
            min_experience: self.min_experience,
        }
    }
}
