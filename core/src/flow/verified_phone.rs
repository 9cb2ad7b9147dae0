//! Proof that a phone number passed verification

use crate::domain::value_objects::{PhoneNumber, VerificationMethod};

/// A phone the verify endpoint reported as `verified: true`
///
/// Only the verification flow can create one, and lead submission takes it
/// by value, so no lead is written for an unverified phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedPhone {
    phone: PhoneNumber,
    method: VerificationMethod,
}

impl VerifiedPhone {
    pub(crate) fn new(phone: PhoneNumber, method: VerificationMethod) -> Self {
        Self { phone, method }
    }

    /// Canonical phone number
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn method(&self) -> VerificationMethod {
        self.method
    }
}
