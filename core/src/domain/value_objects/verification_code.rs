//! One-time verification code value object.

use pl_shared::validation::is_valid_verification_code;
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

pub use pl_shared::validation::CODE_LENGTH;

/// Code that development mode tells testers to use. Any valid code is accepted there.
pub const DEMO_CODE: &str = "123456";

/// Exactly six ASCII digits, no other normalization
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if is_valid_verification_code(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidCodeFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for VerificationCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Codes never end up in logs
impl fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VerificationCode(******)")
    }
}
