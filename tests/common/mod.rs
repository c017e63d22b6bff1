//! Common test utilities for integration tests.
//!
//! Builds clients wired to a `wiremock` server, with storage in a temporary
//! directory so tests never touch `~/.folio`.
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! let client = TestClient::new(&server);
//! let snapshot = client.portfolio.hydrate_all().await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use folio::adapters::mock::{FixedHostPreference, InMemoryCredentials};
use folio::adapters::{FileStore, ReqwestHttpClient};
use folio::config::ClientConfig;
use folio::gateway::GatewayClient;
use folio::portfolio::Portfolio;
use folio::traits::{KeyValueStore, TOKEN_KEY};
use tempfile::TempDir;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-12345";

/// A portfolio client against a mock server, with file storage in a temp dir.
pub struct TestClient {
    pub portfolio: Portfolio,
    pub store: Arc<FileStore>,
    /// Kept alive for the lifetime of the client
    pub dir: TempDir,
}

impl TestClient {
    pub fn new(server: &MockServer) -> Self {
        Self::with_config(test_config(&server.uri()))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let store = Arc::new(FileStore::in_dir(dir.path()));
        let http = ReqwestHttpClient::with_timeout(config.request_timeout).expect("http client");

        let portfolio = Portfolio::new(
            config,
            Arc::new(http),
            store.clone(),
            &FixedHostPreference::none(),
        );

        Self {
            portfolio,
            store,
            dir,
        }
    }

    /// Store a bearer token as a prior login would have.
    pub fn sign_in(&self) {
        self.store.set(TOKEN_KEY, TEST_TOKEN).expect("store token");
    }

    pub fn stored_token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).expect("read token")
    }
}

/// Config pointing at `base_url` with a short timeout.
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(2))
}

/// A gateway over the real reqwest transport and in-memory credentials.
pub fn gateway_for(base_url: &str, credentials: &InMemoryCredentials) -> GatewayClient {
    GatewayClient::new(
        Arc::new(ReqwestHttpClient::with_timeout(Duration::from_secs(2)).expect("http client")),
        Arc::new(credentials.clone()),
        base_url,
    )
}

/// Base URL of a server that has already shut down.
pub async fn unreachable_base_url() -> String {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);
    uri
}
