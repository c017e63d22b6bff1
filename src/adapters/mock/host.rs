//! Fixed host preference for testing.

use crate::preferences::Theme;
use crate::traits::HostPreference;

/// Host preference that always reports the same answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedHostPreference(pub Option<Theme>);

impl FixedHostPreference {
    pub fn light() -> Self {
        Self(Some(Theme::Light))
    }

    pub fn dark() -> Self {
        Self(Some(Theme::Dark))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl HostPreference for FixedHostPreference {
    fn preferred_theme(&self) -> Option<Theme> {
        self.0
    }
}
