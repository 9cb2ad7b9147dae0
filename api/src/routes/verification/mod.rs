//! Phone verification route handlers
//!
//! - `POST /send-sms-verification` - start a verification
//! - `POST /verify-sms-code` - check the code the user typed

pub mod send_sms_verification;
pub mod verify_sms_code;

pub use send_sms_verification::send_sms_verification;
pub use verify_sms_code::verify_sms_code;

use actix_web::HttpRequest;
use pl_core::VerificationService;
use std::sync::Arc;
use uuid::Uuid;

/// Application state that holds shared services
pub struct AppState {
    pub verification_service: Arc<VerificationService>,
}

impl AppState {
    pub fn new(verification_service: Arc<VerificationService>) -> Self {
        Self {
            verification_service,
        }
    }
}

/// Correlation id for log lines: the caller's `x-request-id`, or a fresh short id
pub(crate) fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string()[..8].to_string())
}
