#![allow(dead_code)]

//! Shared helpers for API integration tests

use actix_web::web;
use pl_api::app::build_state;
use pl_api::routes::verification::AppState;
use pl_shared::VerifyProviderConfig;

/// State in development mode with no simulated latency
pub fn fallback_state() -> web::Data<AppState> {
    let config = VerifyProviderConfig {
        fallback_delay_ms: 0,
        ..Default::default()
    };
    build_state(&config).expect("fallback state")
}

/// State in live mode against the given Verify API root
pub fn live_state(base_url: &str) -> web::Data<AppState> {
    let mut config = VerifyProviderConfig::with_credentials("ACtest_account", "test_token", "VAtest_service");
    config.base_url = base_url.to_string();
    config.request_timeout_secs = 5;
    build_state(&config).expect("live state")
}
