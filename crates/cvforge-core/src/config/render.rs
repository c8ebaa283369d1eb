//! Document rendering configuration.

use serde::{Deserialize, Serialize};

/// PDF rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Path to the `wkhtmltopdf` binary.
    #[serde(default = "default_binary")]
    pub wkhtmltopdf_path: String,
    /// Rendering timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Page size passed to the renderer.
    #[serde(default = "default_page_size")]
    pub page_size: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wkhtmltopdf_path: default_binary(),
            timeout_seconds: default_timeout(),
            page_size: default_page_size(),
        }
    }
}

fn default_binary() -> String {
    "wkhtmltopdf".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> String {
    "A4".to_string()
}
