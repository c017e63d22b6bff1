//! Error handling for the folio client.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain errors**: gateway, storage, configuration, validation
//! - **Unified Error Type**: `FolioError` consolidates all of them
//! - **Result Type Alias**: `FolioResult<T>`
//!
//! | Category | Raised by | Retryable |
//! |----------|-----------|-----------|
//! | Network | `GatewayError::Unreachable` | Yes |
//! | Auth | `GatewayError::AuthExpired` | No |
//! | Server | `GatewayError::RequestFailed` (5xx) | Yes |
//! | Client | `RequestFailed` (4xx), `MalformedPayload` | No |
//! | User | `ValidationError` | No |
//! | System | `StorageError`, credential store | No |
//! | Configuration | `ConfigError` | No |
//!
//! Read-path failures never leave the hydration resolver; see
//! [`crate::hydrate`].

mod category;
mod config;
mod folio_error;
mod gateway;
mod storage;
mod validation;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use folio_error::FolioError;
pub use gateway::GatewayError;
pub use storage::StorageError;
pub use validation::ValidationError;

/// Type alias for Results using FolioError.
pub type FolioResult<T> = Result<T, FolioError>;
