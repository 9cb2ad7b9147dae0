//! API response envelopes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Failure envelope shared by both verification endpoints
///
/// `verified` is only present on the verify endpoint, where it is always `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `false`
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    /// Human-readable, localized error message
    pub error: String,

    /// When the error occurred (RFC 3339)
    pub timestamp: DateTime<Utc>,
}

impl ErrorEnvelope {
    /// Create an error envelope for the send endpoint
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            verified: None,
            error: error.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create an error envelope for the verify endpoint
    pub fn not_verified(error: impl Into<String>) -> Self {
        Self {
            verified: Some(false),
            ..Self::new(error)
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Active verification mode (`twilio_verify` or `development_mode`)
    pub mode: String,
    pub timestamp: DateTime<Utc>,
}
