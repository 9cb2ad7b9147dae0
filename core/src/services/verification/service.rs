//! Main verification service implementation

use std::sync::Arc;
use tracing;

use pl_shared::validation::is_blank;

use crate::domain::value_objects::{PhoneNumber, VerificationCode, VerificationMethod};
use crate::errors::{ProviderError, ValidationError, VerificationError, VerificationResult};

use super::traits::VerificationStrategy;
use super::types::{SendCodeResult, VerifyCodeResult};

/// Verification service for sending and checking SMS codes
///
/// The strategy is fixed at construction, so every request served by one
/// instance uses the same method.
#[derive(Clone)]
pub struct VerificationService {
    strategy: Arc<dyn VerificationStrategy>,
}

impl VerificationService {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `strategy` - Live provider or development fallback
    pub fn new(strategy: Arc<dyn VerificationStrategy>) -> Self {
        Self { strategy }
    }

    /// Method every request on this service will use
    pub fn method(&self) -> VerificationMethod {
        self.strategy.method()
    }

    /// Send a verification code to a phone number
    ///
    /// This method:
    /// 1. Rejects a missing or blank phone number
    /// 2. Normalizes the phone to its canonical form
    /// 3. Starts a verification with the configured strategy
    ///
    /// # Arguments
    ///
    /// * `request_id` - Correlation id for log lines
    /// * `raw_phone` - Phone number as typed by the user
    pub async fn send_code(
        &self,
        request_id: &str,
        raw_phone: Option<&str>,
    ) -> VerificationResult<SendCodeResult> {
        let raw_phone = match raw_phone {
            Some(raw) if !is_blank(raw) => raw,
            _ => {
                tracing::warn!(request_id, event = "send_code_rejected", "Phone number missing");
                return Err(ValidationError::MissingPhoneNumber.into());
            }
        };

        let phone = PhoneNumber::normalize(raw_phone);
        let method = self.method();

        tracing::info!(
            request_id,
            phone = %phone.masked(),
            method = method.as_str(),
            event = "send_code_request",
            "Sending verification code"
        );

        match self.strategy.start_verification(&phone).await {
            Ok(started) => {
                tracing::info!(
                    request_id,
                    phone = %phone.masked(),
                    method = method.as_str(),
                    status = started.status.as_str(),
                    event = "send_code_success",
                    "Verification code sent"
                );
                Ok(SendCodeResult {
                    sid: started.sid,
                    method,
                    phone,
                })
            }
            Err(e) => {
                log_failure(request_id, &phone, method, "send_code_failure", &e);
                Err(e)
            }
        }
    }

    /// Verify a code previously sent to a phone number
    ///
    /// Both fields are required and the code must be 6 digits. These checks
    /// run before the strategy is consulted, in either mode.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyCodeResult)` - The backend approved the code
    /// * `Err(VerificationError)` - Invalid input, rejected code or unreachable provider
    pub async fn verify_code(
        &self,
        request_id: &str,
        raw_phone: Option<&str>,
        raw_code: Option<&str>,
    ) -> VerificationResult<VerifyCodeResult> {
        let (raw_phone, raw_code) = match (raw_phone, raw_code) {
            (Some(phone), Some(code)) if !is_blank(phone) && !code.is_empty() => (phone, code),
            _ => {
                tracing::warn!(request_id, event = "verify_code_rejected", "Phone number or code missing");
                return Err(ValidationError::MissingFields.into());
            }
        };

        let code = VerificationCode::parse(raw_code).map_err(|e| {
            tracing::warn!(request_id, event = "verify_code_rejected", "Malformed verification code");
            VerificationError::from(e)
        })?;

        let phone = PhoneNumber::normalize(raw_phone);
        let method = self.method();

        tracing::info!(
            request_id,
            phone = %phone.masked(),
            method = method.as_str(),
            event = "verify_code_attempt",
            "Checking verification code"
        );

        let checked = match self.strategy.check_verification(&phone, &code).await {
            Ok(checked) => checked,
            Err(e) => {
                log_failure(request_id, &phone, method, "verify_code_failure", &e);
                return Err(e);
            }
        };

        if !checked.status.is_approved() {
            tracing::warn!(
                request_id,
                phone = %phone.masked(),
                method = method.as_str(),
                status = checked.status.as_str(),
                event = "verify_code_failure",
                "Verification code not approved"
            );
            return Err(ProviderError::NotApproved {
                status: checked.status.as_str().to_string(),
            }
            .into());
        }

        tracing::info!(
            request_id,
            phone = %phone.masked(),
            method = method.as_str(),
            event = "verify_code_success",
            "Verification code approved"
        );

        Ok(VerifyCodeResult {
            verified: true,
            method,
            phone,
        })
    }
}

fn log_failure(
    request_id: &str,
    phone: &PhoneNumber,
    method: VerificationMethod,
    event: &'static str,
    error: &VerificationError,
) {
    tracing::error!(
        request_id,
        phone = %phone.masked(),
        method = method.as_str(),
        kind = error.kind(),
        provider_code = ?provider_code(error),
        error = %error,
        event,
        "Verification backend call failed"
    );
}

fn provider_code(error: &VerificationError) -> Option<u32> {
    match error {
        VerificationError::Provider(p) => p.provider_code(),
        _ => None,
    }
}
