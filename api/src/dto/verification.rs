use pl_core::{SendCodeResult, VerifyCodeResult};
use pl_core::domain::value_objects::VerificationMethod;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /send-sms-verification`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SendSmsVerificationRequest {
    /// Phone as typed, e.g. "(11) 99999-9999"
    #[serde(rename = "phoneNumber", default)]
    #[validate(required, length(min = 1))]
    pub phone_number: Option<String>,
}

/// Body of `POST /verify-sms-code`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifySmsCodeRequest {
    #[serde(rename = "phoneNumber", default)]
    #[validate(required, length(min = 1))]
    pub phone_number: Option<String>,

    /// 6-digit verification code
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendSmsVerificationResponse {
    pub success: bool,
    pub sid: String,
    pub method: VerificationMethod,
    pub phone: String,
    /// Development-mode hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SendSmsVerificationResponse {
    pub fn new(result: SendCodeResult, message: Option<String>) -> Self {
        Self {
            success: true,
            sid: result.sid,
            method: result.method,
            phone: result.phone.into_inner(),
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifySmsCodeResponse {
    pub success: bool,
    pub verified: bool,
    pub method: VerificationMethod,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifySmsCodeResponse {
    pub fn new(result: VerifyCodeResult, message: Option<String>) -> Self {
        Self {
            success: true,
            verified: result.verified,
            method: result.method,
            phone: result.phone.into_inner(),
            message,
        }
    }
}
