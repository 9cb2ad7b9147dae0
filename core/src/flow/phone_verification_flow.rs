//! State machine behind the phone verification screen

use pl_shared::validation::CODE_LENGTH;
use pl_shared::Language;
use thiserror::Error;
use tracing;

use crate::domain::value_objects::{PhoneNumber, VerificationMethod, DEMO_CODE};

use super::api::VerificationApi;
use super::verified_phone::VerifiedPhone;

/// Where the flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Mounted, nothing sent yet
    Idle,
    /// Send request in flight
    Sending,
    /// First send failed; `resend` may retry
    SendFailed,
    /// A code was sent and the user may type it
    Coded,
    /// Check request in flight
    Verifying,
    Verified,
    /// The user went back; all state discarded
    Cancelled,
}

/// Misuse of the flow API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("cannot {action} while {state:?}")]
    InvalidTransition { action: &'static str, state: FlowState },

    #[error("code must have 6 digits")]
    CodeIncomplete,
}

/// Client verification flow for one phone number
pub struct PhoneVerificationFlow<A: VerificationApi> {
    api: A,
    phone_number: String,
    lang: Language,
    state: FlowState,
    code: String,
    method: Option<VerificationMethod>,
    sid: Option<String>,
    error: Option<String>,
    code_sent: bool,
}

impl<A: VerificationApi> PhoneVerificationFlow<A> {
    pub fn new(api: A, phone_number: impl Into<String>, lang: Language) -> Self {
        Self {
            api,
            phone_number: phone_number.into(),
            lang,
            state: FlowState::Idle,
            code: String::new(),
            method: None,
            sid: None,
            error: None,
            code_sent: false,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Phone as typed by the user
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn method(&self) -> Option<VerificationMethod> {
        self.method
    }

    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    /// Last error message to display, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Demonstration code shown while the server runs in development mode
    pub fn fallback_hint(&self) -> Option<&'static str> {
        match self.method {
            Some(method) if method.is_development() => Some(DEMO_CODE),
            _ => None,
        }
    }

    /// Send the first code. Called once when the screen mounts.
    pub async fn start(&mut self) -> Result<(), FlowError> {
        if self.state != FlowState::Idle {
            return Err(self.invalid("start"));
        }
        self.send().await;
        Ok(())
    }

    /// Request a new code after a failure or a lost SMS
    ///
    /// The typed code and the last known method are kept while the
    /// request is in flight. Once a code has been sent, a failed resend
    /// returns to `Coded` so the earlier code can still be submitted.
    pub async fn resend(&mut self) -> Result<(), FlowError> {
        match self.state {
            FlowState::SendFailed | FlowState::Coded => {
                self.send().await;
                Ok(())
            }
            _ => Err(self.invalid("resend")),
        }
    }

    /// Update the code from raw input, keeping at most six digits
    pub fn set_code(&mut self, input: &str) {
        self.code = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(CODE_LENGTH)
            .collect();
    }

    /// Whether the verify button is enabled
    pub fn can_submit(&self) -> bool {
        self.state == FlowState::Coded && self.code.len() == CODE_LENGTH
    }

    /// Check the typed code
    ///
    /// # Returns
    /// * `Ok(Some(VerifiedPhone))` - The server confirmed the code
    /// * `Ok(None)` - The check failed; `error()` holds the message
    pub async fn submit(&mut self) -> Result<Option<VerifiedPhone>, FlowError> {
        if self.state != FlowState::Coded {
            return Err(self.invalid("submit"));
        }
        if self.code.len() != CODE_LENGTH {
            return Err(FlowError::CodeIncomplete);
        }

        self.state = FlowState::Verifying;
        self.error = None;

        match self.api.verify_code(&self.phone_number, &self.code).await {
            Ok(reply) if reply.verified => {
                tracing::info!(method = reply.method.as_str(), event = "flow_verified", "Phone verified");
                self.state = FlowState::Verified;
                self.method = Some(reply.method);
                let phone = PhoneNumber::normalize(&reply.phone);
                Ok(Some(VerifiedPhone::new(phone, reply.method)))
            }
            Ok(reply) => {
                let fallback = self
                    .lang
                    .pick("Código inválido ou expirado", "Invalid or expired code");
                self.fail_check(reply.message.unwrap_or_else(|| fallback.to_string()));
                Ok(None)
            }
            Err(e) => {
                self.fail_check(e.user_message(self.lang));
                Ok(None)
            }
        }
    }

    /// Leave the screen, discarding everything
    pub fn back(&mut self) {
        self.state = FlowState::Cancelled;
        self.code.clear();
        self.method = None;
        self.sid = None;
        self.error = None;
        self.code_sent = false;
    }

    async fn send(&mut self) {
        self.state = FlowState::Sending;
        self.error = None;

        match self.api.send_code(&self.phone_number).await {
            Ok(reply) => {
                tracing::info!(method = reply.method.as_str(), event = "flow_code_sent", "Verification code sent");
                self.method = Some(reply.method);
                self.sid = Some(reply.sid);
                self.code_sent = true;
                self.state = FlowState::Coded;
            }
            Err(e) => {
                let message = e.user_message(self.lang);
                tracing::warn!(error = %e, event = "flow_send_failed", "Verification code not sent");
                self.error = Some(message);
                self.state = if self.code_sent {
                    FlowState::Coded
                } else {
                    FlowState::SendFailed
                };
            }
        }
    }

    fn fail_check(&mut self, message: String) {
        tracing::warn!(event = "flow_check_failed", "Verification code rejected");
        self.error = Some(message);
        self.state = FlowState::Coded;
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            action,
            state: self.state,
        }
    }
}
