//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// S3-compatible object storage configuration (MinIO in development).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// S3 endpoint URL (for non-AWS services like MinIO).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Bucket for generated resume PDFs.
    #[serde(default = "default_resume_bucket")]
    pub resume_bucket: String,
    /// Bucket for uploaded media (avatars, resume photos).
    #[serde(default = "default_media_bucket")]
    pub media_bucket: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Base URL used when building public object links.
    ///
    /// Falls back to the endpoint when empty.
    #[serde(default)]
    pub public_base_url: String,
    /// Maximum upload size in bytes for media files.
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Allowed media file extensions.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

fn default_endpoint() -> String {
    "http://localhost:9000".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_resume_bucket() -> String {
    "resumes".to_string()
}

fn default_media_bucket() -> String {
    "media".to_string()
}

fn default_max_upload() -> u64 {
    10_485_760 // 10 MB
}

fn default_allowed_extensions() -> Vec<String> {
    vec![
        "png".to_string(),
        "jpg".to_string(),
        "jpeg".to_string(),
        "svg".to_string(),
    ]
}
