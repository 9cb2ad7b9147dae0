//! Verification backends
//!
//! ## Features
//!
//! - **Twilio Verify**: live one-time codes via the Verify v2 API
//! - **Development fallback**: simulated sends, any well-formed code accepted
//! - **Selection**: one backend per process, chosen from the credentials
//! - **Security**: phone numbers masked in logs, secrets never logged

use std::sync::Arc;
use std::time::Duration;

use pl_core::services::VerificationStrategy;
use pl_shared::VerifyProviderConfig;

use crate::InfrastructureError;

pub mod fallback;
pub mod twilio_verify;

pub use fallback::FallbackVerification;
pub use twilio_verify::{TwilioVerifyClient, TwilioVerifyConfig};

#[cfg(test)]
mod tests;

/// Create the verification backend for this process
///
/// A complete credential set selects Twilio Verify; anything less selects
/// the development fallback. The fallback is never built when credentials
/// are present.
pub fn create_verification_strategy(
    config: &VerifyProviderConfig,
) -> Result<Arc<dyn VerificationStrategy>, InfrastructureError> {
    match config.credentials() {
        Some(credentials) => {
            let twilio_config = TwilioVerifyConfig::new(credentials, config);
            let client = TwilioVerifyClient::new(twilio_config)?;
            tracing::info!(
                base_url = %config.base_url,
                timeout_secs = config.request_timeout_secs,
                "Twilio Verify credentials found, using live verification"
            );
            Ok(Arc::new(client))
        }
        None => {
            tracing::warn!(
                missing = ?config.missing_credentials(),
                "Twilio Verify not configured, running in development mode"
            );
            Ok(Arc::new(FallbackVerification::new(Duration::from_millis(
                config.fallback_delay_ms,
            ))))
        }
    }
}
