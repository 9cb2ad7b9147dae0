//! Unit tests for the Twilio Verify client against a mock server

use httpmock::prelude::*;
use serde_json::json;

use pl_core::domain::value_objects::{PhoneNumber, VerificationCode, VerificationStatus};
use pl_core::errors::{ProviderError, TransportError, VerificationError};
use pl_core::services::VerificationStrategy;

use crate::verify::{TwilioVerifyClient, TwilioVerifyConfig};

const SERVICE_SID: &str = "VAtest_service";

fn client_for(server: &MockServer, timeout_secs: u64) -> TwilioVerifyClient {
    TwilioVerifyClient::new(TwilioVerifyConfig {
        account_sid: "ACtest_account".to_string(),
        auth_token: "test_token".to_string(),
        service_sid: SERVICE_SID.to_string(),
        base_url: server.base_url(),
        request_timeout_secs: timeout_secs,
    })
    .unwrap()
}

fn phone() -> PhoneNumber {
    PhoneNumber::normalize("(11) 99999-9999")
}

fn code(raw: &str) -> VerificationCode {
    VerificationCode::parse(raw).unwrap()
}

#[tokio::test]
async fn test_start_verification_posts_form() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/Services/{}/Verifications", SERVICE_SID))
                .header_exists("authorization")
                .x_www_form_urlencoded_tuple("To", "+5511999999999")
                .x_www_form_urlencoded_tuple("Channel", "sms");
            then.status(201)
                .json_body(json!({"sid": "VE0123456789", "status": "pending", "channel": "sms"}));
        })
        .await;

    let started = client_for(&server, 5).start_verification(&phone()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(started.sid, "VE0123456789");
    assert_eq!(started.status, VerificationStatus::Pending);
}

#[tokio::test]
async fn test_check_verification_approved() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/Services/{}/VerificationCheck", SERVICE_SID))
                .x_www_form_urlencoded_tuple("To", "+5511999999999")
                .x_www_form_urlencoded_tuple("Code", "123456");
            then.status(200)
                .json_body(json!({"sid": "VE0123456789", "status": "approved", "valid": true}));
        })
        .await;

    let checked = client_for(&server, 5)
        .check_verification(&phone(), &code("123456"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(checked.status.is_approved());
}

#[tokio::test]
async fn test_check_verification_pending_is_not_approved() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("/Services/{}/VerificationCheck", SERVICE_SID));
            then.status(200)
                .json_body(json!({"sid": "VE0123456789", "status": "pending", "valid": false}));
        })
        .await;

    let checked = client_for(&server, 5)
        .check_verification(&phone(), &code("000000"))
        .await
        .unwrap();

    assert_eq!(checked.status, VerificationStatus::Pending);
}

#[tokio::test]
async fn test_not_found_maps_to_verification_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("/Services/{}/VerificationCheck", SERVICE_SID));
            then.status(404).json_body(json!({
                "code": 20404,
                "message": "The requested resource was not found",
                "status": 404
            }));
        })
        .await;

    let err = client_for(&server, 5)
        .check_verification(&phone(), &code("123456"))
        .await
        .unwrap_err();

    assert_eq!(err, VerificationError::Provider(ProviderError::VerificationNotFound));
}

#[tokio::test]
async fn test_rejection_carries_provider_code() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("/Services/{}/Verifications", SERVICE_SID));
            then.status(400).json_body(json!({
                "code": 21614,
                "message": "'To' number is not a valid mobile number",
                "status": 400
            }));
        })
        .await;

    let err = client_for(&server, 5).start_verification(&phone()).await.unwrap_err();

    assert_eq!(
        err,
        VerificationError::Provider(ProviderError::Rejected {
            status: 400,
            code: Some(21614),
            message: "'To' number is not a valid mobile number".to_string(),
        })
    );
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_as_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("/Services/{}/Verifications", SERVICE_SID));
            then.status(503).body("Service Unavailable");
        })
        .await;

    let err = client_for(&server, 5).start_verification(&phone()).await.unwrap_err();

    match err {
        VerificationError::Provider(ProviderError::Rejected { status, code, message }) => {
            assert_eq!(status, 503);
            assert_eq!(code, None);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_success_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("/Services/{}/Verifications", SERVICE_SID));
            then.status(200).body("<html>ok</html>");
        })
        .await;

    let err = client_for(&server, 5).start_verification(&phone()).await.unwrap_err();

    assert!(matches!(
        err,
        VerificationError::Provider(ProviderError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("/Services/{}/Verifications", SERVICE_SID));
            then.status(201)
                .delay(std::time::Duration::from_secs(3))
                .json_body(json!({"sid": "VE0123456789", "status": "pending"}));
        })
        .await;

    let err = client_for(&server, 1).start_verification(&phone()).await.unwrap_err();

    assert_eq!(err, VerificationError::Transport(TransportError::Timeout));
}

#[tokio::test]
async fn test_unreachable_provider_is_connection_error() {
    let client = TwilioVerifyClient::new(TwilioVerifyConfig {
        account_sid: "ACtest_account".to_string(),
        auth_token: "test_token".to_string(),
        service_sid: SERVICE_SID.to_string(),
        base_url: "http://127.0.0.1:1".to_string(),
        request_timeout_secs: 2,
    })
    .unwrap();

    let err = client.start_verification(&phone()).await.unwrap_err();

    assert!(matches!(
        err,
        VerificationError::Transport(TransportError::Connection(_))
    ));
}
