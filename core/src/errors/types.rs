//! Error taxonomy for phone verification
//!
//! Messages here are for logs. User-facing, localized text is chosen in the
//! presentation layer from the variant.

use thiserror::Error;

/// Twilio error codes that get a dedicated user-facing message
pub mod provider_codes {
    /// Authentication failed or number not authorized
    pub const PERMISSION_DENIED: u32 = 20003;
    /// Requested resource not found (verification expired or never issued)
    pub const NOT_FOUND: u32 = 20404;
    /// Invalid 'To' phone number
    pub const INVALID_PHONE_NUMBER: u32 = 21211;
    /// 'To' number is not a valid mobile number
    pub const NOT_SMS_CAPABLE: u32 = 21614;
}

/// Input errors, always fixable by the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Phone number is required")]
    MissingPhoneNumber,

    #[error("Phone number and code are required")]
    MissingFields,

    #[error("Code must be exactly 6 digits")]
    InvalidCodeFormat,
}

/// The provider answered, but not with success
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider rejected request (HTTP {status}, code {code:?}): {message}")]
    Rejected {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    #[error("Verification not found or expired")]
    VerificationNotFound,

    #[error("Verification not approved (status: {status})")]
    NotApproved { status: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Provider-specific error code, when one was returned
    pub fn provider_code(&self) -> Option<u32> {
        match self {
            ProviderError::Rejected { code, .. } => *code,
            ProviderError::VerificationNotFound => Some(provider_codes::NOT_FOUND),
            _ => None,
        }
    }
}

/// The provider could not be reached
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Provider request timed out")]
    Timeout,

    #[error("Could not reach provider: {0}")]
    Connection(String),
}
