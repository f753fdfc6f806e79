use std::{fmt, str::FromStr};

use thiserror::Error;

/// Local storage key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Class set on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored preference first, then the platform color scheme, then light.
    /// Stored values that don't parse count as absent.
    pub fn resolve(stored: Option<&str>, prefers_dark: Option<bool>) -> Self {
        if let Some(theme) = stored.and_then(|s| s.parse().ok()) {
            return theme;
        }
        match prefers_dark {
            Some(true) => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_order() {
        assert_eq!(Theme::resolve(Some("dark"), Some(false)), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(None, Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Light);
        assert_eq!(Theme::resolve(None, None), Theme::Light);
    }

    #[test]
    fn test_invalid_stored_value_is_ignored() {
        assert_eq!(Theme::resolve(Some("solarized"), Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), None), Theme::Light);
        assert_eq!(
            "solarized".parse::<Theme>(),
            Err(ThemeError::Unknown("solarized".to_string()))
        );
    }

    #[test]
    fn test_toggle_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            let stored = theme.to_string();
            let once = theme.toggled();
            assert_ne!(once, theme);
            assert_ne!(once.is_dark(), theme.is_dark());

            let twice = once.toggled();
            assert_eq!(twice, theme);
            assert_eq!(twice.to_string(), stored);
            assert_eq!(stored.parse::<Theme>(), Ok(theme));
        }
    }
}
