//! Twilio Verify Service Implementation
//!
//! Talks to the Verify v2 REST API with reqwest. Twilio generates, delivers
//! and stores the code; this side only starts and checks verifications.
//!
//! ## Behavior
//!
//! - One outbound call per operation, no retries
//! - Bounded request timeout
//! - Provider error bodies `{ code, message }` parsed into `ProviderError`
//! - Phone numbers masked in logs

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use pl_core::domain::value_objects::{
    PhoneNumber, VerificationCode, VerificationMethod, VerificationStatus,
};
use pl_core::errors::{provider_codes, ProviderError, TransportError, VerificationError, VerificationResult};
use pl_core::services::{CheckedVerification, StartedVerification, VerificationStrategy};
use pl_shared::{ProviderCredentials, VerifyProviderConfig};

use crate::InfrastructureError;

/// Twilio Verify client configuration
#[derive(Clone)]
pub struct TwilioVerifyConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Verify Service SID
    pub service_sid: String,
    /// API root without trailing slash
    pub base_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioVerifyConfig {
    pub fn new(credentials: ProviderCredentials<'_>, provider: &VerifyProviderConfig) -> Self {
        Self {
            account_sid: credentials.account_sid.to_string(),
            auth_token: credentials.auth_token.to_string(),
            service_sid: credentials.service_sid.to_string(),
            base_url: provider.base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: provider.request_timeout_secs,
        }
    }
}

impl std::fmt::Debug for TwilioVerifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioVerifyConfig")
            .field("service_sid", &self.service_sid)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish_non_exhaustive()
    }
}

/// Verification resource returned by both endpoints
#[derive(Debug, Deserialize)]
struct VerificationResource {
    #[serde(default)]
    sid: Option<String>,
    status: String,
}

/// Error body Twilio sends with non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct TwilioErrorBody {
    #[serde(default)]
    code: Option<u32>,
    #[serde(default)]
    message: Option<String>,
}

/// Live Twilio Verify backend
pub struct TwilioVerifyClient {
    client: Client,
    config: TwilioVerifyConfig,
}

impl TwilioVerifyClient {
    /// Create a new client. The underlying connection pool is reused for every call.
    pub fn new(config: TwilioVerifyConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        debug!(service_sid = %config.service_sid, "Twilio Verify client initialized");
        Ok(Self { client, config })
    }

    fn service_url(&self, resource: &str) -> String {
        format!(
            "{}/Services/{}/{}",
            self.config.base_url, self.config.service_sid, resource
        )
    }

    async fn post_form(&self, resource: &str, form: &[(&str, &str)]) -> VerificationResult<VerificationResource> {
        let response = self
            .client
            .post(self.service_url(resource))
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(provider_error(status, response).await.into());
        }

        let body = response.text().await.map_err(transport_error)?;
        serde_json::from_str::<VerificationResource>(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()).into())
    }
}

#[async_trait]
impl VerificationStrategy for TwilioVerifyClient {
    fn method(&self) -> VerificationMethod {
        VerificationMethod::TwilioVerify
    }

    async fn start_verification(&self, phone: &PhoneNumber) -> VerificationResult<StartedVerification> {
        let resource = self
            .post_form("Verifications", &[("To", phone.as_str()), ("Channel", "sms")])
            .await?;
        let sid = resource
            .sid
            .ok_or_else(|| ProviderError::InvalidResponse("verification sid missing".to_string()))?;
        Ok(StartedVerification {
            sid,
            status: VerificationStatus::parse(&resource.status),
        })
    }

    async fn check_verification(
        &self,
        phone: &PhoneNumber,
        code: &VerificationCode,
    ) -> VerificationResult<CheckedVerification> {
        let resource = self
            .post_form("VerificationCheck", &[("To", phone.as_str()), ("Code", code.as_str())])
            .await?;
        Ok(CheckedVerification {
            status: VerificationStatus::parse(&resource.status),
        })
    }
}

fn transport_error(error: reqwest::Error) -> VerificationError {
    if error.is_timeout() {
        TransportError::Timeout.into()
    } else {
        TransportError::Connection(error.to_string()).into()
    }
}

async fn provider_error(status: StatusCode, response: Response) -> ProviderError {
    let text = response.text().await.unwrap_or_default();
    let body: TwilioErrorBody = serde_json::from_str(&text).unwrap_or_default();

    if status == StatusCode::NOT_FOUND || body.code == Some(provider_codes::NOT_FOUND) {
        return ProviderError::VerificationNotFound;
    }

    warn!(status = status.as_u16(), code = ?body.code, "Twilio Verify rejected request");
    ProviderError::Rejected {
        status: status.as_u16(),
        code: body.code,
        message: body.message.unwrap_or(text),
    }
}
