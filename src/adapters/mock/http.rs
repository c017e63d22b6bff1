//! Mock HTTP transport for testing.
//!
//! Provides a configurable mock transport that returns predefined responses
//! or transport errors, and records every request it receives.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, HttpRequest, Response};

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Fail without a response
    Error(HttpError),
}

impl MockResponse {
    /// A response with a JSON body.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }

    /// A response with an empty body.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, Bytes::new()))
    }
}

/// Mock HTTP transport for testing.
///
/// Responses are matched by exact URL first, then by URL prefix, then the
/// default. Clones share configuration and recorded requests.
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://api.test/home",
///     MockResponse::json(200, serde_json::json!({"subtitle": "a,b"})),
/// );
/// let response = client.send(HttpRequest::new(Method::Get, "http://api.test/home")).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    /// Artificial latency before answering
    delay: Arc<Mutex<Option<Duration>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL (exact or prefix match).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Delay every answer by `delay` (tokio time, so paused clocks apply).
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest prefix wins so "/skills" does not shadow "/skills?limit=100"
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<Response, HttpError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.get_response(&url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Method;

    #[tokio::test]
    async fn test_exact_match_and_recording() {
        let client = MockHttpClient::new();
        client.set_response("http://api.test/home", MockResponse::status(204));

        let response = client
            .send(HttpRequest::new(Method::Get, "http://api.test/home").with_header("X", "1"))
            .await
            .unwrap();
        assert_eq!(response.status, 204);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].header("x"), Some("1"));
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.set_response("http://api.test/", MockResponse::status(404));
        client.set_response("http://api.test/skills", MockResponse::status(200));

        let response = client
            .send(HttpRequest::new(Method::Get, "http://api.test/skills?limit=100"))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_error_and_missing_config() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://api.test/down",
            MockResponse::Error(HttpError::Timeout("slow".to_string())),
        );

        let result = client
            .send(HttpRequest::new(Method::Get, "http://api.test/down"))
            .await;
        assert!(matches!(result, Err(HttpError::Timeout(_))));

        let result = client
            .send(HttpRequest::new(Method::Get, "http://api.test/other"))
            .await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_default_response_and_shared_clones() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::status(500));
        let cloned = client.clone();

        let response = cloned
            .send(HttpRequest::new(Method::Post, "http://api.test/anything"))
            .await
            .unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(client.get_requests().len(), 1);

        client.clear_requests();
        assert!(cloned.get_requests().is_empty());
    }
}
