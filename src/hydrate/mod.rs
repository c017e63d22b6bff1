//! Fetch-with-fallback hydration.
//!
//! Every dynamic section starts from a render-safe default, issues one GET,
//! and replaces the default only when the response yields usable data. Read
//! failures never leave this module: they are logged and the default stays.
//!
//! [`hydrate`] is the awaitable form. [`HydrationTask`] runs the same
//! procedure on a spawned task, publishes through a `watch` channel, and
//! drops late completions once cancelled.

mod task;

pub use task::HydrationTask;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::gateway::GatewayClient;
use crate::traits::Response;

/// A value that is always render-safe, plus its loading flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Hydrated<T> {
    /// Current value; the default until a fetch replaced it
    pub value: T,
    /// True until the single fetch has resolved
    pub is_loading: bool,
    default: T,
}

impl<T: Clone> Hydrated<T> {
    /// Initial state: the default, still loading.
    pub fn loading(default: T) -> Self {
        Self {
            value: default.clone(),
            is_loading: true,
            default,
        }
    }

    /// The fallback this hydration started from.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    fn resolve(mut self, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.value = value;
        }
        self.is_loading = false;
        self
    }
}

/// Outcome of a per-endpoint extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted<T> {
    /// Usable data that replaces the default
    Success(T),
    /// Nothing usable; keep the default
    Empty,
}

impl<T> Extracted<T> {
    /// `Success` unless `value` is `None`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Extracted::Success(value),
            None => Extracted::Empty,
        }
    }
}

/// Decode a response body as JSON, reporting the endpoint on failure.
pub fn decode_json<P: DeserializeOwned>(
    response: &Response,
    endpoint: &str,
) -> Result<P, GatewayError> {
    response
        .json::<P>()
        .map_err(|e| GatewayError::MalformedPayload {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
}

/// Hydrate one section.
///
/// Issues a single GET to `endpoint`. On success `extract` receives the
/// response and the default; its `Success` replaces the value. Any gateway
/// error, extractor error, or `Empty` keeps the default. The returned state
/// is never loading.
pub async fn hydrate<T, F>(
    gateway: &GatewayClient,
    endpoint: &str,
    default: T,
    extract: F,
) -> Hydrated<T>
where
    T: Clone,
    F: FnOnce(&Response, &T) -> Result<Extracted<T>, GatewayError>,
{
    let state = Hydrated::loading(default);

    let extracted = match gateway.get(endpoint).await {
        Ok(response) => extract(&response, state.default_value()),
        Err(e) => Err(e),
    };

    match extracted {
        Ok(Extracted::Success(value)) => {
            debug!("Hydrated {}", endpoint);
            state.resolve(Some(value))
        }
        Ok(Extracted::Empty) => {
            debug!("{} returned no usable data, keeping defaults", endpoint);
            state.resolve(None)
        }
        Err(e) => {
            warn!(
                code = e.error_code(),
                "Failed to hydrate {}, keeping defaults: {}", endpoint, e
            );
            state.resolve(None)
        }
    }
}
