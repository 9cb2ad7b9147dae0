//! SMS verification provider configuration
//!
//! The provider is Twilio Verify. When any of the three credentials is
//! missing, the server runs in development mode and never calls the provider.

use serde::{Deserialize, Serialize};
use std::env;

/// Default Twilio Verify API root
pub const DEFAULT_VERIFY_BASE_URL: &str = "https://verify.twilio.com/v2";

/// Default bound on a single provider call
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default simulated latency for development-mode sends
pub const DEFAULT_FALLBACK_DELAY_MS: u64 = 1000;

/// Verification provider settings
#[derive(Clone, Deserialize, Serialize)]
pub struct VerifyProviderConfig {
    /// Twilio Account SID
    pub account_sid: Option<String>,
    /// Twilio Auth Token
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,
    /// Twilio Verify Service SID
    pub service_sid: Option<String>,
    /// API root, overridable for tests
    pub base_url: String,
    /// Timeout for one provider request in seconds
    pub request_timeout_secs: u64,
    /// Simulated send latency in development mode
    pub fallback_delay_ms: u64,
}

/// Borrowed view of a complete credential set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderCredentials<'a> {
    pub account_sid: &'a str,
    pub auth_token: &'a str,
    pub service_sid: &'a str,
}

impl Default for VerifyProviderConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            service_sid: None,
            base_url: DEFAULT_VERIFY_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            fallback_delay_ms: DEFAULT_FALLBACK_DELAY_MS,
        }
    }
}

impl VerifyProviderConfig {
    /// Build a config with a full credential set and default tuning
    pub fn with_credentials(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        service_sid: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: Some(account_sid.into()),
            auth_token: Some(auth_token.into()),
            service_sid: Some(service_sid.into()),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Each credential reads its `TWILIO_*` name first, then the generic
    /// `PROVIDER_*` alias. Blank values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |primary: &str, alias: &str| {
            lookup(primary)
                .or_else(|| lookup(alias))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            account_sid: read("TWILIO_ACCOUNT_SID", "PROVIDER_ACCOUNT_ID"),
            auth_token: read("TWILIO_AUTH_TOKEN", "PROVIDER_AUTH_TOKEN"),
            service_sid: read("TWILIO_VERIFY_SERVICE_SID", "PROVIDER_VERIFY_SERVICE_ID"),
            base_url: lookup("TWILIO_VERIFY_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_VERIFY_BASE_URL.to_string()),
            request_timeout_secs: lookup("TWILIO_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            fallback_delay_ms: lookup("FALLBACK_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FALLBACK_DELAY_MS),
        }
    }

    /// Complete credential set, if every part is present
    pub fn credentials(&self) -> Option<ProviderCredentials<'_>> {
        match (&self.account_sid, &self.auth_token, &self.service_sid) {
            (Some(account_sid), Some(auth_token), Some(service_sid)) => Some(ProviderCredentials {
                account_sid,
                auth_token,
                service_sid,
            }),
            _ => None,
        }
    }

    /// Whether live provider mode is available
    pub fn has_credentials(&self) -> bool {
        self.credentials().is_some()
    }

    /// Names of missing credentials, for startup logging
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.account_sid.is_none() {
            missing.push("TWILIO_ACCOUNT_SID");
        }
        if self.auth_token.is_none() {
            missing.push("TWILIO_AUTH_TOKEN");
        }
        if self.service_sid.is_none() {
            missing.push("TWILIO_VERIFY_SERVICE_SID");
        }
        missing
    }
}

impl std::fmt::Debug for VerifyProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let presence = |v: &Option<String>| if v.is_some() { "PRESENT" } else { "MISSING" };
        f.debug_struct("VerifyProviderConfig")
            .field("account_sid", &presence(&self.account_sid))
            .field("auth_token", &presence(&self.auth_token))
            .field("service_sid", &presence(&self.service_sid))
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("fallback_delay_ms", &self.fallback_delay_ms)
            .finish()
    }
}
