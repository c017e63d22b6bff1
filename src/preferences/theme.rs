//! Theme preference state machine.
//!
//! Two states, `Light` and `Dark`, no terminal state. The initial state is
//! resolved from storage, then the host signal, then `Dark`. Entering any
//! state (the initial one included) applies it as the single active theme
//! and persists it, in that order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::watch;

use crate::traits::{HostPreference, KeyValueStore, THEME_KEY};

/// Presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The persisted string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Where the initial theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// A valid value was found under the `theme` key
    Stored,
    /// The host environment expressed a preference
    Host,
    /// Neither was available
    Default,
}

/// Persisted theme preference.
///
/// Construct one per process and pass it to whoever renders or toggles.
/// The applied theme is published on a watch channel so renderers can follow
/// changes.
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
    applied: watch::Sender<Theme>,
    source: ThemeSource,
}

impl PreferenceStore {
    /// Resolve the initial theme and enter it.
    pub fn initialize(store: Arc<dyn KeyValueStore>, host: &dyn HostPreference) -> Self {
        let (initial, source) = resolve_initial(store.as_ref(), host);
        let (applied, _) = watch::channel(initial);
        let prefs = Self {
            store,
            applied,
            source,
        };
        prefs.enter(initial);
        tracing::debug!(theme = %initial, ?source, "Theme preference initialized");
        prefs
    }

    /// The theme currently applied.
    pub fn current(&self) -> Theme {
        *self.applied.borrow()
    }

    /// Where the initial theme came from.
    pub fn initial_source(&self) -> ThemeSource {
        self.source
    }

    /// Follow the applied theme.
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.applied.subscribe()
    }

    /// Flip the theme unconditionally. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.enter(next);
        tracing::info!(theme = %next, "Theme toggled");
        next
    }

    /// Enter a specific theme. Entering the current theme re-persists it.
    pub fn set(&self, theme: Theme) -> Theme {
        self.enter(theme);
        theme
    }

    /// The theme held in storage, if readable.
    pub fn persisted(&self) -> Option<Theme> {
        read_stored(self.store.as_ref())
    }

    fn enter(&self, theme: Theme) {
        self.applied.send_replace(theme);
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(theme = %theme, error = %e, "Failed to persist theme preference");
        }
    }
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("current", &self.current())
            .field("source", &self.source)
            .finish()
    }
}

fn read_stored(store: &dyn KeyValueStore) -> Option<Theme> {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unrecognized stored theme");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored theme");
            None
        }
    }
}

fn resolve_initial(store: &dyn KeyValueStore, host: &dyn HostPreference) -> (Theme, ThemeSource) {
    if let Some(theme) = read_stored(store) {
        return (theme, ThemeSource::Stored);
    }
    if let Some(theme) = host.preferred_theme() {
        return (theme, ThemeSource::Host);
    }
    (Theme::Dark, ThemeSource::Default)
}
