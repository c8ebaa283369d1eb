//! Persisted resume records and list query types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::document::ResumeDocument;
use super::enums::{JobLocation, JobType};

/// The root row of a persisted resume.
///
/// Document sections (work, education, skills, ...) live in child tables
/// keyed by `resume_id` and cascade on delete.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRecord {
    /// Unique resume identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Public URL of the generated PDF.
    pub url: String,
    /// Object storage filename.
    pub filename: String,
    /// Candidate full name.
    pub full_name: String,
    /// Desired job title.
    pub job_title: String,
    /// Professional summary.
    pub summary: String,
    /// Expected salary.
    pub salary: i64,
    /// Preferred work location mode.
    pub job_location: JobLocation,
    /// Preferred contract type.
    pub job_type: JobType,
    /// Years of experience.
    pub experience_years: i32,
    /// Personal website URL.
    pub website: String,
    /// Profile photo URL.
    pub profile_image: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Template the PDF was rendered with.
    pub template: String,
    /// Label language the PDF was rendered with.
    pub lang: String,
    /// When the resume was generated.
    pub created_at: DateTime<Utc>,
}

/// A resume row as returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeSummary {
    /// Unique resume identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Object storage filename.
    pub filename: String,
    /// Public URL of the generated PDF.
    pub url: String,
    /// Desired job title.
    pub job_title: String,
    /// Candidate city.
    pub city: String,
    /// Expected salary.
    pub salary: i64,
    /// Preferred work location mode.
    pub job_location: JobLocation,
    /// Preferred contract type.
    pub job_type: JobType,
    /// Years of experience.
    pub experience_years: i32,
}

/// Everything needed to persist a freshly generated resume.
#[derive(Debug, Clone)]
pub struct NewResume {
    /// Pre-allocated resume ID.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Public URL of the generated PDF.
    pub url: String,
    /// Object storage filename.
    pub filename: String,
    /// The full document; sections are fanned out into child tables.
    pub document: ResumeDocument,
}

/// Optional filters for the public resume listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeFilter {
    /// Substring match on job title.
    pub job_title: Option<String>,
    /// Exact work location mode.
    pub job_location: Option<JobLocation>,
    /// Exact contract type.
    pub job_type: Option<JobType>,
    /// Minimum expected salary.
    pub min_salary: Option<i64>,
    /// Exact region match.
    pub region: Option<String>,
    /// Minimum years of experience.
    pub min_experience: Option<i32>,
}

impl ResumeFilter {
    /// Whether any filter is set.
    pub fn is_empty(&self) -> bool {
        self.job_title.is_none()
            && self.job_location.is_none()
            && self.job_type.is_none()
            && self.min_salary.is_none()
            && self.region.is_none()
            && self.min_experience.is_none()
    }
}
