//! The resume document assembled by the builder flow.
//!
//! Field names follow the JSON Resume convention used by the web client:
//! mostly snake_case with a handful of camelCase holdovers
//! (`startDate`, `countryCode`, `studyType`, `softSkills`).

use serde::{Deserialize, Serialize};

use super::enums::{JobLocation, JobType};

/// Personal information and job preferences, collected in step one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basics {
    /// Candidate full name.
    pub name: String,
    /// Desired job title.
    #[serde(default)]
    pub label: String,
    /// Profile photo URL.
    #[serde(default)]
    pub image: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Short professional summary.
    #[serde(default)]
    pub summary: String,
    /// Where the candidate lives.
    #[serde(default)]
    pub location: Location,
    /// Personal website URL.
    #[serde(default)]
    pub url: String,
    /// Social profiles.
    #[serde(default)]
    pub profiles: Vec<Profile>,
    /// Expected salary.
    #[serde(default)]
    pub salary: i64,
    /// Preferred work location mode.
    pub job_location: JobLocation,
    /// Preferred contract type.
    pub job_type: JobType,
    /// Years of professional experience.
    #[serde(default)]
    pub experience_years: i32,
}

/// A geographic location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    /// City name.
    #[serde(default)]
    pub city: String,
    /// ISO country code.
    #[serde(default, rename = "countryCode")]
    pub country_code: String,
    /// Region or state.
    #[serde(default)]
    pub region: String,
}

/// A social or professional network profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Network name (GitHub, LinkedIn, ...).
    pub network: String,
    /// Username on that network.
    #[serde(default)]
    pub username: String,
    /// Profile URL.
    pub url: String,
}

/// A work history entry, collected in step two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    /// Position held.
    pub position: String,
    /// Employer name.
    pub company: String,
    /// Start date (free-form, typically `YYYY-MM`).
    #[serde(default, rename = "startDate")]
    pub start_date: String,
    /// End date; empty means current.
    #[serde(default, rename = "endDate")]
    pub end_date: String,
    /// What the candidate did there.
    #[serde(default)]
    pub summary: String,
    /// Work location.
    #[serde(default)]
    pub location: String,
    /// Skills exercised in the role.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Contract type for the role.
    #[serde(default)]
    pub contract_type: String,
}

/// A personal or professional project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Project URL.
    #[serde(default)]
    pub url: String,
}

/// An education history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    /// School or university name.
    pub institution: String,
    /// Field of study.
    #[serde(default)]
    pub area: String,
    /// Degree type (Bachelor, Master, ...).
    #[serde(default, rename = "studyType")]
    pub study_type: String,
    /// Institution location.
    #[serde(default)]
    pub location: String,
    /// Start date.
    #[serde(default, rename = "startDate")]
    pub start_date: String,
    /// End date; empty means ongoing.
    #[serde(default, rename = "endDate")]
    pub end_date: String,
    /// Grade or score.
    #[serde(default)]
    pub score: String,
    /// Notable courses taken.
    #[serde(default)]
    pub courses: Vec<String>,
}

/// A certificate or award.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate title.
    pub title: String,
    /// Date awarded.
    #[serde(default)]
    pub date: String,
    /// Issuing organization.
    #[serde(default)]
    pub issuer: String,
    /// Score or grade, if any.
    #[serde(default)]
    pub score: String,
    /// Verification URL.
    #[serde(default)]
    pub url: String,
}

/// A skill, hard or soft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Proficiency level.
    #[serde(default)]
    pub level: String,
    /// Related keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A spoken language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    /// Language name.
    pub language: String,
    /// Fluency description.
    #[serde(default)]
    pub fluency: String,
}

/// A personal interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interest {
    /// Interest name.
    pub name: String,
    /// Related keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Rendering metadata: template and language selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeMeta {
    /// Template name (currently `classic`).
    pub template: String,
    /// Label language (`en`, `ru`, `uz`).
    #[serde(default)]
    pub lang: String,
}

/// The history sections collected in step two of the builder flow.
///
/// Staged separately from [`Basics`] and merged into a
/// [`ResumeDocument`] at generation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MainSections {
    /// Work history.
    #[serde(default)]
    pub work: Vec<Work>,
    /// Projects.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Education history.
    #[serde(default)]
    pub education: Vec<Education>,
    /// Certificates and awards.
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    /// Hard skills.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Soft skills.
    #[serde(default, rename = "softSkills")]
    pub soft_skills: Vec<Skill>,
    /// Spoken languages.
    #[serde(default)]
    pub languages: Vec<Language>,
    /// Personal interests.
    #[serde(default)]
    pub interests: Vec<Interest>,
}

/// The complete resume document, assembled from the staged sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// Personal information and job preferences.
    pub basics: Basics,
    /// Work history.
    #[serde(default)]
    pub work: Vec<Work>,
    /// Projects.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Education history.
    #[serde(default)]
    pub education: Vec<Education>,
    /// Certificates and awards.
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    /// Hard skills.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Soft skills.
    #[serde(default, rename = "softSkills")]
    pub soft_skills: Vec<Skill>,
    /// Spoken languages.
    #[serde(default)]
    pub languages: Vec<Language>,
    /// Personal interests.
    #[serde(default)]
    pub interests: Vec<Interest>,
    /// Rendering metadata.
    pub meta: ResumeMeta,
}

impl ResumeDocument {
    /// Merges the two staged sections and rendering metadata into a
    /// complete document.
    pub fn from_parts(basics: Basics, main: MainSections, meta: ResumeMeta) -> Self {
        Self {
            basics,
            work: main.work,
            projects: main.projects,
            education: main.education,
            certificates: main.certificates,
            skills: main.skills,
            soft_skills: main.soft_skills,
            languages: main.languages,
            interests: main.interests,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_deserializes_client_json() {
        let json = serde_json::json!({
            "basics": {
                "name": "Jane Doe",
                "label": "Backend Engineer",
                "email": "jane@example.com",
                "location": {"city": "Tashkent", "countryCode": "UZ", "region": "Tashkent"},
                "profiles": [{"network": "GitHub", "username": "jane", "url": "https://github.com/jane"}],
                "salary": 3000,
                "job_location": "online",
                "job_type": "full-time",
                "experience_years": 4
            },
            "work": [{"position": "Engineer", "company": "Acme", "startDate": "2021-01", "endDate": ""}],
            "softSkills": [{"name": "Communication"}],
            "meta": {"template": "classic", "lang": "en"}
        });
        let doc: ResumeDocument = serde_json::from_value(json).unwrap();
        assert_eq!(doc.basics.location.country_code, "UZ");
        assert_eq!(doc.work[0].start_date, "2021-01");
        assert_eq!(doc.soft_skills[0].name, "Communication");
        assert!(doc.certificates.is_empty());
    }
}
