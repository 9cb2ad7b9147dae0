//! Which verification path served a request.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    /// Live Twilio Verify provider
    TwilioVerify,
    /// Credential-less simulation
    DevelopmentMode,
}

impl VerificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationMethod::TwilioVerify => "twilio_verify",
            VerificationMethod::DevelopmentMode => "development_mode",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, VerificationMethod::DevelopmentMode)
    }
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
