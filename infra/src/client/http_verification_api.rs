//! reqwest implementation of the flow's `VerificationApi`

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, error};

use pl_core::flow::{ClientError, SendCodeReply, VerificationApi, VerifyCodeReply};

use crate::InfrastructureError;

const SEND_PATH: &str = "/send-sms-verification";
const VERIFY_PATH: &str = "/verify-sms-code";

/// Shown when a failed send carries no message
const SEND_FAILED: &str = "Erro ao enviar SMS. Tente novamente.";
/// Shown when a failed check carries no message
const CHECK_FAILED: &str = "Código inválido ou expirado";

/// Calls the two verification endpoints over HTTP
#[derive(Clone)]
pub struct HttpVerificationApi {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpVerificationApi {
    /// # Arguments
    ///
    /// * `base_url` - Server root, e.g. `https://api.example.com`
    /// * `api_key` - Sent as a bearer token when present
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, InfrastructureError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value, failed: &str) -> Result<T, ClientError> {
        let mut request = self.client.post(format!("{}{}", self.base_url, path)).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(client_error)?;
        let status = response.status();
        let text = response.text().await.map_err(client_error)?;
        debug!(path, status = status.as_u16(), "Verification endpoint responded");

        let envelope: Value = serde_json::from_str(&text).map_err(|e| {
            error!(path, status = status.as_u16(), error = %e, "Verification endpoint returned non-JSON body");
            ClientError::InvalidResponse(e.to_string())
        })?;

        if envelope.get("success").and_then(Value::as_bool) != Some(true) {
            let message = envelope
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or(failed)
                .to_string();
            return Err(ClientError::Rejected(message));
        }

        serde_json::from_value(envelope).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl VerificationApi for HttpVerificationApi {
    async fn send_code(&self, phone_number: &str) -> Result<SendCodeReply, ClientError> {
        self.post(SEND_PATH, json!({ "phoneNumber": phone_number }), SEND_FAILED)
            .await
    }

    async fn verify_code(&self, phone_number: &str, code: &str) -> Result<VerifyCodeReply, ClientError> {
        self.post(
            VERIFY_PATH,
            json!({ "phoneNumber": phone_number, "code": code }),
            CHECK_FAILED,
        )
        .await
    }
}

fn client_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Connection(error.to_string())
    }
}
