//! folio - content-hydration client for a personal-portfolio API
//!
//! One gateway for every outbound request, a fetch-with-fallback hydration
//! resolver for each section, and a persisted light/dark preference. This
//! library exposes modules for use by the binary and integration tests.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod gateway;
pub mod hydrate;
pub mod portfolio;
pub mod preferences;
pub mod traits;
pub mod view_state;
