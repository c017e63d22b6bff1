//! Persisted user preferences.

pub mod theme;

pub use theme::{PreferenceStore, Theme, ThemeSource};
