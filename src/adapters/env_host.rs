//! Host colour-scheme signal read from the environment.
//!
//! `FOLIO_COLOR_SCHEME` (`light` or `dark`) is an explicit override. Failing
//! that, `COLORFGBG` as exported by most terminal emulators
//! (`"<fg>;<bg>"` colour indices) decides: a background of 0-6 or 8 is dark.

use crate::preferences::Theme;
use crate::traits::HostPreference;

pub const ENV_COLOR_SCHEME: &str = "FOLIO_COLOR_SCHEME";
pub const ENV_COLORFGBG: &str = "COLORFGBG";

/// Reads the host preference from environment variables on each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvHostPreference;

impl EnvHostPreference {
    pub fn new() -> Self {
        Self
    }
}

impl HostPreference for EnvHostPreference {
    fn preferred_theme(&self) -> Option<Theme> {
        if let Ok(value) = std::env::var(ENV_COLOR_SCHEME) {
            if let Ok(theme) = value.parse() {
                return Some(theme);
            }
        }
        std::env::var(ENV_COLORFGBG)
            .ok()
            .and_then(|value| theme_from_colorfgbg(&value))
    }
}

/// Interpret a `COLORFGBG` value.
pub fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(Theme::Dark),
        _ => Some(Theme::Light),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_colorfgbg_parsing() {
        assert_eq!(theme_from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("12;default;8"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("0;7"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("garbage"), None);
        assert_eq!(theme_from_colorfgbg(""), None);
    }

    #[test]
    #[serial]
    fn test_explicit_override_wins() {
        std::env::set_var(ENV_COLOR_SCHEME, "light");
        std::env::set_var(ENV_COLORFGBG, "15;0");
        let theme = EnvHostPreference::new().preferred_theme();
        std::env::remove_var(ENV_COLOR_SCHEME);
        std::env::remove_var(ENV_COLORFGBG);
        assert_eq!(theme, Some(Theme::Light));
    }

    #[test]
    #[serial]
    fn test_no_signal() {
        std::env::remove_var(ENV_COLOR_SCHEME);
        std::env::remove_var(ENV_COLORFGBG);
        assert_eq!(EnvHostPreference::new().preferred_theme(), None);
    }
}
