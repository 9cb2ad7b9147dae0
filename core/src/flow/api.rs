//! Contract between the client flow and the verification endpoints

use async_trait::async_trait;
use pl_shared::Language;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::value_objects::VerificationMethod;

/// Successful reply of the send endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendCodeReply {
    pub sid: String,
    pub method: VerificationMethod,
    pub phone: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply of the verify endpoint when the server answered `success: true`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyCodeReply {
    pub verified: bool,
    pub method: VerificationMethod,
    pub phone: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Why a call to the verification endpoints failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered with `success: false`; carries its message
    #[error("{0}")]
    Rejected(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Connection timed out")]
    Timeout,

    /// The body was not a verification envelope
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Message to show next to the form
    pub fn user_message(&self, lang: Language) -> String {
        match self {
            ClientError::Rejected(message) => message.clone(),
            ClientError::Connection(_) => lang
                .pick(
                    "Erro de conexão. Verifique sua internet e tente novamente.",
                    "Connection error. Check your internet and try again.",
                )
                .to_string(),
            ClientError::Timeout => lang
                .pick("Timeout na conexão. Tente novamente.", "Connection timed out. Try again.")
                .to_string(),
            ClientError::InvalidResponse(_) => lang
                .pick(
                    "Erro interno do servidor. Tente novamente em alguns minutos.",
                    "Internal server error. Try again in a few minutes.",
                )
                .to_string(),
        }
    }
}

/// The two verification endpoints as seen by the client
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// Request a code for the phone as typed by the user
    async fn send_code(&self, phone_number: &str) -> Result<SendCodeReply, ClientError>;

    /// Check the code the user typed
    ///
    /// `Ok` with `verified: false` is possible if the server sends it; the
    /// flow treats it as a failed check.
    async fn verify_code(&self, phone_number: &str, code: &str) -> Result<VerifyCodeReply, ClientError>;
}
