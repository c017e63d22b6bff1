//! Client configuration.
//!
//! The only required value is the content service's base URL. Everything
//! else has a default and can be overridden from the environment.
//!
//! # Example
//!
//! ```ignore
//! use folio::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_base_url("https://api.example.com")
//!     .with_timeout(Duration::from_secs(5));
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Base URL used when `FOLIO_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default subtitle rotation period in milliseconds.
pub const DEFAULT_CAROUSEL_PERIOD_MS: u64 = 3000;

pub const ENV_BASE_URL: &str = "FOLIO_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "FOLIO_TIMEOUT_SECS";
pub const ENV_CAROUSEL_PERIOD_MS: &str = "FOLIO_CAROUSEL_PERIOD_MS";
pub const ENV_STORAGE_DIR: &str = "FOLIO_STORAGE_DIR";

/// Startup configuration, resolved once and handed to the composition root.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base address every gateway path is joined onto
    pub base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Subtitle carousel period
    pub carousel_period: Duration,
    /// Directory holding `storage.json` (defaults to `~/.folio`)
    pub storage_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            carousel_period: Duration::from_millis(DEFAULT_CAROUSEL_PERIOD_MS),
            storage_dir: None,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content service base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the carousel period.
    pub fn with_carousel_period(mut self, period: Duration) -> Self {
        self.carousel_period = period;
        self
    }

    /// Set the storage directory.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Create config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_BASE_URL) {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    var: ENV_BASE_URL,
                    value: url.to_string(),
                });
            }
            config = config.with_base_url(url);
        }

        if let Some(value) = get(ENV_TIMEOUT_SECS) {
            let secs = parse_positive(ENV_TIMEOUT_SECS, &value)?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        if let Some(value) = get(ENV_CAROUSEL_PERIOD_MS) {
            let millis = parse_positive(ENV_CAROUSEL_PERIOD_MS, &value)?;
            config = config.with_carousel_period(Duration::from_millis(millis));
        }

        if let Some(dir) = get(ENV_STORAGE_DIR) {
            config = config.with_storage_dir(dir);
        }

        Ok(config)
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.carousel_period, Duration::from_secs(3));
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::from_lookup(lookup(&[(
            ENV_BASE_URL,
            "https://api.example.com/",
        )]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_BASE_URL, "ftp://x")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_numeric_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_TIMEOUT_SECS, "3"),
            (ENV_CAROUSEL_PERIOD_MS, "250"),
            (ENV_STORAGE_DIR, "/tmp/folio"),
        ]))
        .unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.carousel_period, Duration::from_millis(250));
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/folio")));
    }

    #[test]
    fn test_zero_and_garbage_numbers_rejected() {
        assert!(ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).is_err());
        assert!(ClientConfig::from_lookup(lookup(&[(ENV_CAROUSEL_PERIOD_MS, "fast")])).is_err());
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_BASE_URL, "   ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(ENV_TIMEOUT_SECS, "7");
        let config = ClientConfig::from_env();
        std::env::remove_var(ENV_TIMEOUT_SECS);
        assert_eq!(config.unwrap().request_timeout, Duration::from_secs(7));
    }
}
