//! Message broker configuration.

use serde::{Deserialize, Serialize};

/// NATS message broker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// Whether event publishing is enabled.
    ///
    /// When disabled, events are dropped with a log line instead of
    /// being published.
    #[serde(default)]
    pub enabled: bool,
    /// NATS server URL.
    #[serde(default = "default_url")]
    pub url: String,
    /// Subject prefix for all published events.
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: default_url(),
            subject_prefix: default_subject_prefix(),
        }
    }
}

fn default_url() -> String {
    "nats://localhost:4222".to_string()
}

fn default_subject_prefix() -> String {
    "cvforge".to_string()
}
