//! Resume workflow configuration.

use serde::{Deserialize, Serialize};

/// Settings for the multi-step resume builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeConfig {
    /// TTL for staged resume sections in seconds.
    ///
    /// A draft abandoned for longer than this is discarded.
    #[serde(default = "default_staging_ttl")]
    pub staging_ttl_seconds: u64,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            staging_ttl_seconds: default_staging_ttl(),
        }
    }
}

fn default_staging_ttl() -> u64 {
    5 * 60 * 60 // 5 hours
}
