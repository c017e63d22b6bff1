//! Gateway client for the content service.
//!
//! Every outbound request goes through [`GatewayClient`]. It joins paths
//! onto the configured base address, attaches the stored bearer credential,
//! and classifies the outcome into [`GatewayError`]. A 401/403 answer deletes
//! the stored credential before the error is returned.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::GatewayError;
use crate::traits::{
    CredentialsProvider, FormPart, HttpClient, HttpRequest, Method, RequestBody, Response,
};

/// Content type sent with JSON and body-less requests.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Single outbound client shared by every hydration and the contact form.
#[derive(Clone)]
pub struct GatewayClient {
    http: Arc<dyn HttpClient>,
    credentials: Arc<dyn CredentialsProvider>,
    base_url: String,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GatewayClient {
    /// Create a gateway over a transport and a credential source.
    pub fn new(
        http: Arc<dyn HttpClient>,
        credentials: Arc<dyn CredentialsProvider>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base address with exactly one `/` between.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolve a server-relative asset path (e.g. a project image).
    ///
    /// Absolute `http(s)` URLs are returned unchanged.
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            self.url_for(path)
        }
    }

    /// Send one request and classify the outcome.
    ///
    /// # Returns
    /// - `Ok(response)` for any 2xx status
    /// - `Err(AuthExpired)` for 401/403, after deleting the stored credential
    /// - `Err(Unreachable)` when no response arrived
    /// - `Err(RequestFailed)` for every other status
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<Response, GatewayError> {
        let url = self.url_for(path);
        let mut request = HttpRequest::new(method, url.as_str());

        let multipart = body.as_ref().map(RequestBody::is_multipart).unwrap_or(false);
        if !multipart {
            request = request.with_header("Content-Type", JSON_CONTENT_TYPE);
        }

        match self.credentials.load().await {
            Ok(Some(credential)) => {
                request = request.with_header("Authorization", credential.bearer_header());
            }
            Ok(None) => {}
            Err(e) => warn!("Could not read stored credential, sending without it: {}", e),
        }

        if let Some(body) = body {
            request = request.with_body(body);
        }

        debug!("{} {}", method, url);
        let response = self.http.send(request).await.map_err(|e| {
            warn!("{} {} unreachable: {}", method, url, e);
            GatewayError::Unreachable {
                reason: e.to_string(),
            }
        })?;

        if response.is_success() {
            debug!("{} {} -> {}", method, url, response.status);
            return Ok(response);
        }

        if GatewayError::is_auth_status(response.status) {
            info!(
                "{} {} rejected with {}, clearing stored credential",
                method, url, response.status
            );
            if let Err(e) = self.credentials.clear().await {
                warn!("Failed to clear stored credential: {}", e);
            }
            return Err(GatewayError::AuthExpired {
                status: response.status,
            });
        }

        let body = response.text().unwrap_or_default();
        Err(GatewayError::request_failed(response.status, &body))
    }

    /// GET `path`.
    pub async fn get(&self, path: &str) -> Result<Response, GatewayError> {
        self.request(Method::Get, path, None).await
    }

    /// POST `payload` serialized as JSON.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, GatewayError> {
        let json = serde_json::to_string(payload).map_err(|e| GatewayError::MalformedPayload {
            endpoint: path.to_string(),
            message: e.to_string(),
        })?;
        self.request(Method::Post, path, Some(RequestBody::Json(json)))
            .await
    }

    /// POST a multipart form. The transport sets the content type and boundary.
    pub async fn post_multipart(
        &self,
        path: &str,
        parts: Vec<FormPart>,
    ) -> Result<Response, GatewayError> {
        self.request(Method::Post, path, Some(RequestBody::Multipart(parts)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryCredentials, MockHttpClient, MockResponse};
    use crate::traits::HttpError;
    use serde_json::json;

    fn gateway(http: &MockHttpClient, credentials: &InMemoryCredentials) -> GatewayClient {
        GatewayClient::new(
            Arc::new(http.clone()),
            Arc::new(credentials.clone()),
            "http://api.test/",
        )
    }

    #[test]
    fn test_url_joining() {
        let g = gateway(&MockHttpClient::new(), &InMemoryCredentials::new());
        assert_eq!(g.base_url(), "http://api.test");
        assert_eq!(g.url_for("/home"), "http://api.test/home");
        assert_eq!(g.url_for("home"), "http://api.test/home");
        assert_eq!(
            g.resolve_url("/uploads/a.png"),
            "http://api.test/uploads/a.png"
        );
        assert_eq!(
            g.resolve_url("https://cdn.test/a.png"),
            "https://cdn.test/a.png"
        );
    }

    #[tokio::test]
    async fn test_attaches_bearer_when_present() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, json!({})));
        let credentials = InMemoryCredentials::with_token("abc");

        gateway(&http, &credentials).get("/home").await.unwrap();

        let requests = http.get_requests();
        assert_eq!(requests[0].url, "http://api.test/home");
        assert_eq!(requests[0].header("authorization"), Some("Bearer abc"));
        assert_eq!(requests[0].header("content-type"), Some(JSON_CONTENT_TYPE));
    }

    #[tokio::test]
    async fn test_sends_without_credential() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(200));

        gateway(&http, &InMemoryCredentials::new())
            .get("/home")
            .await
            .unwrap();

        assert_eq!(http.get_requests()[0].header("authorization"), None);
    }

    #[tokio::test]
    async fn test_auth_rejection_clears_credential() {
        for status in [401, 403] {
            let http = MockHttpClient::new();
            http.set_default_response(MockResponse::status(status));
            let credentials = InMemoryCredentials::with_token("stale");

            let err = gateway(&http, &credentials).get("/about").await.unwrap_err();

            assert_eq!(err, GatewayError::AuthExpired { status });
            assert!(credentials.get_credential().is_none());
        }
    }

    #[tokio::test]
    async fn test_auth_rejection_survives_clear_failure() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(401));
        let credentials = InMemoryCredentials::with_token("stale");
        credentials.set_clear_should_fail(true);

        let err = gateway(&http, &credentials).get("/about").await.unwrap_err();
        assert_eq!(err, GatewayError::AuthExpired { status: 401 });
    }

    #[tokio::test]
    async fn test_transport_failure_is_unreachable() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let credentials = InMemoryCredentials::with_token("keep");

        let err = gateway(&http, &credentials).get("/home").await.unwrap_err();

        assert!(matches!(err, GatewayError::Unreachable { .. }));
        assert!(credentials.get_credential().is_some());
    }

    #[tokio::test]
    async fn test_other_status_is_request_failed() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Success(Response::new(
            500,
            bytes::Bytes::from("boom"),
        )));

        let err = gateway(&http, &InMemoryCredentials::new())
            .get("/skills")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GatewayError::RequestFailed {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_post_json_body() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(201));

        gateway(&http, &InMemoryCredentials::new())
            .post_json("/contact", &json!({"name": "A"}))
            .await
            .unwrap();

        let request = &http.get_requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.body,
            Some(RequestBody::Json(r#"{"name":"A"}"#.to_string()))
        );
    }

    #[tokio::test]
    async fn test_multipart_omits_json_content_type() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(200));

        gateway(&http, &InMemoryCredentials::with_token("t"))
            .post_multipart("/projects", vec![FormPart::text("title", "x")])
            .await
            .unwrap();

        let request = &http.get_requests()[0];
        assert_eq!(request.header("content-type"), None);
        assert_eq!(request.header("authorization"), Some("Bearer t"));
        assert!(request.body.as_ref().map(RequestBody::is_multipart).unwrap_or(false));
    }
}
