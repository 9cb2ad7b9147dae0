//! Types for verification service results

use serde::Serialize;

use crate::domain::value_objects::{PhoneNumber, VerificationMethod, VerificationStatus};

/// What a strategy returns after starting a verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedVerification {
    /// Provider verification id, or a synthetic one in development mode
    pub sid: String,
    pub status: VerificationStatus,
}

/// What a strategy returns after checking a code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedVerification {
    pub status: VerificationStatus,
}

/// Result of sending a verification code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendCodeResult {
    /// Verification id from the provider
    pub sid: String,
    /// Strategy that handled the request
    pub method: VerificationMethod,
    /// Canonical phone the code was sent to
    pub phone: PhoneNumber,
}

/// Result of an approved verification check
///
/// A rejected check is reported as an error, so `verified` is always true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyCodeResult {
    pub verified: bool,
    pub method: VerificationMethod,
    pub phone: PhoneNumber,
}
