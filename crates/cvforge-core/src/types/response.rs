//! Shared wire types for error responses.

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Stable machine-readable code (e.g. `NOT_FOUND`).
    pub error: String,
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Structured field-level details, when validation produced them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
