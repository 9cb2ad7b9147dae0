//! Type definitions module
//!
//! - `language` - Language detection for localized messages
//! - `response` - JSON envelopes returned by the HTTP endpoints

pub mod language;
pub mod response;

pub use language::Language;
pub use response::{ErrorEnvelope, HealthResponse};
