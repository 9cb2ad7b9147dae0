//! Shared utilities and common types for the PharmaLead server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response envelopes shared by the HTTP endpoints
//! - Utility functions (phone normalization and masking, code validation)
//! - Language detection for localized messages

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, ProviderCredentials, ServerConfig, VerifyProviderConfig};
pub use types::{ErrorEnvelope, HealthResponse, Language};
pub use utils::{phone, validation};
