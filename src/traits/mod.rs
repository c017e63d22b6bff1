//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for everything the core
//! touches outside the process, enabling dependency injection, mocking, and
//! better testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - Outbound HTTP transport
//! - [`CredentialsProvider`] - Bearer credential storage and retrieval
//! - [`KeyValueStore`] - Durable client-local key/value storage
//! - [`HostPreference`] - Host colour-scheme signal

pub mod credentials;
pub mod host;
pub mod http;
pub mod storage;

pub use credentials::{Credential, CredentialsError, CredentialsProvider};
pub use host::HostPreference;
pub use http::{FormPart, Headers, HttpClient, HttpError, HttpRequest, Method, RequestBody, Response};
pub use storage::{KeyValueStore, THEME_KEY, TOKEN_KEY};
