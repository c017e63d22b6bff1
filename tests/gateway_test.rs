//! Integration tests for the gateway over a real HTTP transport.
//!
//! These tests verify:
//! - Bearer credential injection
//! - Credential deletion on 401/403
//! - Failure classification (unreachable, request failed)
//! - Content-type handling for JSON and multipart bodies

mod common;

use common::{gateway_for, unreachable_base_url, TEST_TOKEN};
use folio::adapters::mock::InMemoryCredentials;
use folio::error::GatewayError;
use folio::traits::FormPart;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_bearer_header_attached_when_signed_in() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/home"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"subtitle": "A"})))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = InMemoryCredentials::with_token(TEST_TOKEN);
    let response = gateway_for(&server.uri(), &credentials)
        .get("/home")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_request_sent_without_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    gateway_for(&server.uri(), &InMemoryCredentials::new())
        .get("/about")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[0].headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_unauthorized_deletes_credential() {
    for status in [401u16, 403] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let credentials = InMemoryCredentials::with_token(TEST_TOKEN);
        let err = gateway_for(&server.uri(), &credentials)
            .get("/skills")
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::AuthExpired { status });
        assert!(credentials.get_credential().is_none());
    }
}

#[tokio::test]
async fn test_server_error_is_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let credentials = InMemoryCredentials::with_token(TEST_TOKEN);
    let err = gateway_for(&server.uri(), &credentials)
        .get("/projects")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        GatewayError::RequestFailed {
            status: 503,
            message: "maintenance".to_string()
        }
    );
    assert!(err.is_retryable());
    assert!(credentials.get_credential().is_some());
}

#[tokio::test]
async fn test_connection_refused_is_unreachable() {
    let base_url = unreachable_base_url().await;
    let credentials = InMemoryCredentials::with_token(TEST_TOKEN);

    let err = gateway_for(&base_url, &credentials)
        .get("/home")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Unreachable { .. }));
    assert!(credentials.get_credential().is_some());
}

#[tokio::test]
async fn test_post_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Ada"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway_for(&server.uri(), &InMemoryCredentials::new())
        .post_json("/contact", &json!({"name": "Ada"}))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_multipart_sets_boundary_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    gateway_for(&server.uri(), &InMemoryCredentials::with_token(TEST_TOKEN))
        .post_multipart(
            "/projects",
            vec![
                FormPart::text("title", "Folio"),
                FormPart::file("image", "cover.png", "image/png", vec![0x89u8, 0x50, 0x4e, 0x47]),
            ],
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"title\""));
    assert!(body.contains("filename=\"cover.png\""));
    assert!(requests[0].headers.get("authorization").is_some());
}
