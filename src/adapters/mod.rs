//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP transport using reqwest
//! - [`FileStore`] - JSON-file key/value storage
//! - [`StoredCredentials`] - Bearer token kept in a key/value store
//! - [`EnvHostPreference`] - Host colour scheme from environment variables
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all adapters.

pub mod env_host;
pub mod file_store;
pub mod mock;
pub mod reqwest_http;
pub mod stored_credentials;

pub use env_host::EnvHostPreference;
pub use file_store::FileStore;
pub use mock::{FixedHostPreference, InMemoryCredentials, InMemoryStore, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
pub use stored_credentials::StoredCredentials;
