//! Mock implementations for testing.
//!
//! This module provides mock implementations of all trait abstractions,
//! enabling unit testing without network dependencies or file system access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP transport with configurable responses
//! - [`InMemoryCredentials`] - In-memory credential storage
//! - [`InMemoryStore`] - In-memory key/value storage
//! - [`FixedHostPreference`] - Constant host colour-scheme signal

pub mod credentials;
pub mod host;
pub mod http;
pub mod store;

pub use credentials::InMemoryCredentials;
pub use host::FixedHostPreference;
pub use http::{MockHttpClient, MockResponse};
pub use store::InMemoryStore;
