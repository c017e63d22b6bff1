//! Host environment colour-scheme signal.

use crate::preferences::Theme;

/// Source of the host environment's preferred colour scheme.
///
/// Returns `None` when the host expresses no preference.
pub trait HostPreference: Send + Sync {
    fn preferred_theme(&self) -> Option<Theme>;
}
