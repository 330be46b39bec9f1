//! Tests for the HTTP submission sink against a local mock server

use mockito::{Matcher, Server};
use re_core::errors::SubmissionError;
use re_core::services::submission::SubmissionSink;
use re_shared::{ErrorResponse, SubmissionConfig};
use serde_json::json;

use super::registration;
use crate::submission::HttpSubmissionSink;
use crate::InfrastructureError;

fn sink_for(url: String) -> HttpSubmissionSink {
    let config = SubmissionConfig {
        timeout_secs: 5,
        retry_delay_ms: 1,
        ..SubmissionConfig::http(url)
    };
    HttpSubmissionSink::new(&config).unwrap()
}

#[tokio::test]
async fn test_submit_posts_camel_case_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/register")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "fullName": "Bilal Ahmed",
            "phone": "+923001234567",
            "verificationCode": "123456",
            "latitude": 31.5204,
            "visitingCharge": 500,
            "cnic": "35202-1234567-1",
            "language": "en",
            "selfie": { "source": "camera", "data": "/9g=" }
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"registrationId":"W-77","submittedAt":"2026-01-05T10:00:00Z"}"#)
        .create_async()
        .await;

    let sink = sink_for(format!("{}/register", server.url()));
    let receipt = sink.submit(&registration()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(receipt.registration_id, "W-77");
    assert_eq!(receipt.submitted_at.to_rfc3339(), "2026-01-05T10:00:00+00:00");
}

#[tokio::test]
async fn test_payload_omits_confirmation_and_encodes_photos() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/register")
        .match_body(Matcher::PartialJson(json!({
            "workPhotos": [
                { "fileName": "sink.jpg", "contentType": "image/jpeg", "data": "AQID" },
                { "fileName": "pipe.jpg", "data": "BAUG" }
            ]
        })))
        .with_status(200)
        .with_body(r#"{"id":"W-78"}"#)
        .create_async()
        .await;

    let sink = sink_for(format!("{}/register", server.url()));
    let receipt = sink.submit(&registration()).await.unwrap();

    mock.assert_async().await;
    // Backends answering with a bare `id` are accepted too
    assert_eq!(receipt.registration_id, "W-78");
}

#[tokio::test]
async fn test_unreadable_success_body_still_accepted() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/register")
        .with_status(204)
        .create_async()
        .await;

    let sink = sink_for(format!("{}/register", server.url()));
    let receipt = sink.submit(&registration()).await.unwrap();
    assert!(!receipt.registration_id.is_empty());
}

#[tokio::test]
async fn test_rejection_carries_backend_message() {
    let body = ErrorResponse::new("PHONE_ALREADY_REGISTERED", "This phone number is already registered");

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/register")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&body).unwrap())
        .expect(1)
        .create_async()
        .await;

    let sink = sink_for(format!("{}/register", server.url()));
    let error = sink.submit(&registration()).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(
        error,
        SubmissionError::Rejected {
            message: "This phone number is already registered".to_string()
        }
    );
    assert_eq!(error.user_message(), Some("This phone number is already registered"));
}

#[tokio::test]
async fn test_client_error_without_body_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/register")
        .with_status(400)
        .with_body("bad request")
        .expect(1)
        .create_async()
        .await;

    let sink = sink_for(format!("{}/register", server.url()));
    let error = sink.submit(&registration()).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(error, SubmissionError::Network { .. }));
    assert_eq!(error.user_message(), None);
}

#[tokio::test]
async fn test_server_errors_retried_until_attempts_exhausted() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/register")
        .with_status(503)
        .expect(3)
        .create_async()
        .await;

    let sink = sink_for(format!("{}/register", server.url()));
    let error = sink.submit(&registration()).await.unwrap_err();

    mock.assert_async().await;
    match error {
        SubmissionError::Network { message } => assert!(message.contains("503")),
        other => panic!("Expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let config = SubmissionConfig {
        max_attempts: 1,
        timeout_secs: 2,
        ..SubmissionConfig::http("http://127.0.0.1:1/register")
    };
    let sink = HttpSubmissionSink::new(&config).unwrap();

    let error = sink.submit(&registration()).await.unwrap_err();
    assert!(matches!(error, SubmissionError::Network { .. }));
}

#[test]
fn test_invalid_endpoint_rejected() {
    let result = HttpSubmissionSink::new(&SubmissionConfig::http("not a url"));
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}
