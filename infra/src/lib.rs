//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the PharmaLead
//! backend. It provides the concrete verification backends and the HTTP
//! client used by the verification flow.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Verify**: Twilio Verify over reqwest, plus the development fallback
//! - **Client**: reqwest implementation of the flow's `VerificationApi`

// Re-export core types for convenience
pub use pl_core::errors::*;

/// Verification backends and strategy selection
pub mod verify;

/// HTTP client for the verification endpoints
pub mod client;

pub use client::HttpVerificationApi;
pub use verify::{create_verification_strategy, FallbackVerification, TwilioVerifyClient, TwilioVerifyConfig};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
