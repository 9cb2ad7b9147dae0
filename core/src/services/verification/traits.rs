//! Strategy trait for the verification backend

use async_trait::async_trait;

use crate::domain::value_objects::{PhoneNumber, VerificationCode, VerificationMethod};
use crate::errors::VerificationResult;

use super::types::{CheckedVerification, StartedVerification};

/// A backend able to issue and check one-time codes
///
/// Implemented by the live Twilio Verify client and by the development
/// fallback. Exactly one implementation is chosen per process.
#[async_trait]
pub trait VerificationStrategy: Send + Sync {
    /// Which method this strategy reports to callers
    fn method(&self) -> VerificationMethod;

    /// Ask the backend to deliver a code to `phone`
    async fn start_verification(&self, phone: &PhoneNumber) -> VerificationResult<StartedVerification>;

    /// Ask the backend whether `code` is valid for `phone`
    async fn check_verification(
        &self,
        phone: &PhoneNumber,
        code: &VerificationCode,
    ) -> VerificationResult<CheckedVerification>;
}
