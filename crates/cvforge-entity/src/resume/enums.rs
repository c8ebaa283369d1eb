//! Job location and job type enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the candidate wants to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_location", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobLocation {
    /// On-site work.
    Offline,
    /// Remote work.
    Online,
    /// Mixed on-site and remote.
    Hybrid,
}

impl JobLocation {
    /// Return the location as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Online => "online",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for JobLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobLocation {
    type Err = cvforge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "offline" => Ok(Self::Offline),
            "online" => Ok(Self::Online),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(cvforge_core::AppError::validation(format!(
                "Invalid job location: '{s}'. Expected one of: offline, online, hybrid"
            ))),
        }
    }
}

/// Employment contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_type")]
pub enum JobType {
    /// Full-time employment.
    #[sqlx(rename = "full-time")]
    #[serde(rename = "full-time")]
    FullTime,
    /// Part-time employment.
    #[sqlx(rename = "part-time")]
    #[serde(rename = "part-time")]
    PartTime,
}

impl JobType {
    /// Return the job type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobType {
    type Err = cvforge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full-time" => Ok(Self::FullTime),
            "part-time" => Ok(Self::PartTime),
            _ => Err(cvforge_core::AppError::validation(format!(
                "Invalid job type: '{s}'. Expected one of: full-time, part-time"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_location_from_str() {
        assert_eq!("online".parse::<JobLocation>().unwrap(), JobLocation::Online);
        assert_eq!("OFFLINE".parse::<JobLocation>().unwrap(), JobLocation::Offline);
        assert!("onsite".parse::<JobLocation>().is_err());
    }

    #[test]
    fn test_job_type_wire_format() {
        assert_eq!(JobType::FullTime.as_str(), "full-time");
        assert_eq!("part-time".parse::<JobType>().unwrap(), JobType::PartTime);
        assert!("contract".parse::<JobType>().is_err());
    }

    #[test]
    fn test_job_type_serde_uses_hyphenated_form() {
        let json = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(json, "\"full-time\"");
    }
}
