//! Development-mode verification backend
//!
//! Used when Twilio credentials are missing. Nothing leaves the process:
//! sends are simulated after a short delay and every well-formed code is
//! accepted. Testers are told to use the demonstration code.

use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

use pl_core::domain::value_objects::{
    PhoneNumber, VerificationCode, VerificationMethod, VerificationStatus,
};
use pl_core::errors::VerificationResult;
use pl_core::services::{CheckedVerification, StartedVerification, VerificationStrategy};

/// Prefix of synthetic verification ids
pub const SIMULATION_SID_PREFIX: &str = "dev_simulation_";

/// Simulated verification backend
#[derive(Debug, Clone)]
pub struct FallbackVerification {
    delay: Duration,
}

impl FallbackVerification {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn simulated_sid() -> String {
        let id = Uuid::new_v4().simple().to_string();
        format!("{}{}", SIMULATION_SID_PREFIX, &id[..8])
    }
}

#[async_trait]
impl VerificationStrategy for FallbackVerification {
    fn method(&self) -> VerificationMethod {
        VerificationMethod::DevelopmentMode
    }

    async fn start_verification(&self, phone: &PhoneNumber) -> VerificationResult<StartedVerification> {
        tokio::time::sleep(self.delay).await;
        let sid = Self::simulated_sid();
        tracing::debug!(phone = %phone.masked(), sid = %sid, "Simulated verification send");
        Ok(StartedVerification {
            sid,
            status: VerificationStatus::Pending,
        })
    }

    async fn check_verification(
        &self,
        phone: &PhoneNumber,
        _code: &VerificationCode,
    ) -> VerificationResult<CheckedVerification> {
        tracing::debug!(phone = %phone.masked(), "Simulated verification check accepted");
        Ok(CheckedVerification {
            status: VerificationStatus::Approved,
        })
    }
}
