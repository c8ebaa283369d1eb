//! Domain events published to the message broker.
//!
//! Events are fire-and-forget: consumers (the notification bot, mailers)
//! subscribe independently and a publish failure never fails the request
//! that produced the event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Published after a resume PDF has been generated and persisted.
///
/// The payload carries everything a notification consumer needs to
/// announce the new resume without calling back into the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeCreatedEvent {
    /// The generated resume ID.
    pub resume_id: Uuid,
    /// The owner's user ID.
    pub user_id: Uuid,
    /// Candidate full name.
    pub full_name: String,
    /// Candidate contact email.
    pub email: String,
    /// Candidate phone number.
    pub phone_number: String,
    /// Desired job title.
    pub job_title: String,
    /// Public URL of the generated PDF.
    pub resume_url: String,
    /// Profile links (GitHub, LinkedIn, ...).
    pub links: Vec<String>,
    /// Candidate city.
    pub city: String,
    /// Expected salary.
    pub salary: String,
    /// Short professional summary.
    pub summary: String,
    /// When the resume was created.
    pub created_at: DateTime<Utc>,
}

/// What a verification code is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationPurpose {
    /// Confirming a new account's email address.
    Signup,
    /// Authorizing a password reset.
    PasswordReset,
}

/// Published when a verification code must be delivered to a user.
///
/// Delivery (email, chat bot) is owned entirely by consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCodeEvent {
    /// Recipient email address.
    pub email: String,
    /// The 6-digit code.
    pub code: String,
    /// Why the code was issued.
    pub purpose: VerificationPurpose,
    /// When the code expires.
    pub expires_at: DateTime<Utc>,
}
