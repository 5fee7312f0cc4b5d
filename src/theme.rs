//! Theme selection for the two display modes
//!
//! Themes are referenced by identifier only (e.g. "min-dark"). Resolving an
//! identifier to actual colors happens in the host's theme registry; this
//! crate never checks identifiers against that registry.

use serde::{Deserialize, Serialize};

/// Theme used for dark display mode unless overridden
pub const DEFAULT_DARK_THEME: &str = "min-dark";
/// Theme used for light display mode unless overridden
pub const DEFAULT_LIGHT_THEME: &str = "min-light";

/// Theme identifiers for the dark and light display modes
///
/// Both modes must always be bound; a deck rendered without one of the two
/// modes still receives a complete pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePair {
    #[serde(default = "default_dark")]
    pub dark: String,
    #[serde(default = "default_light")]
    pub light: String,
}

fn default_dark() -> String {
    DEFAULT_DARK_THEME.to_string()
}

fn default_light() -> String {
    DEFAULT_LIGHT_THEME.to_string()
}

impl Default for ThemePair {
    fn default() -> Self {
        Self {
            dark: default_dark(),
            light: default_light(),
        }
    }
}

impl ThemePair {
    pub fn new(dark: impl Into<String>, light: impl Into<String>) -> Self {
        Self {
            dark: dark.into(),
            light: light.into(),
        }
    }

    /// Shape check: both identifiers must be non-empty
    ///
    /// Whether the host's theme registry knows the identifiers is the
    /// host's problem, not checked here.
    pub fn validate(&self) -> Result<(), String> {
        if self.dark.is_empty() {
            return Err("dark theme identifier is empty".to_string());
        }
        if self.light.is_empty() {
            return Err("light theme identifier is empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair() {
        let themes = ThemePair::default();
        assert_eq!(themes.dark, "min-dark");
        assert_eq!(themes.light, "min-light");
        assert!(themes.validate().is_ok());
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let themes = ThemePair::new("", "min-light");
        assert!(themes.validate().is_err());

        let themes = ThemePair::new("min-dark", "");
        assert!(themes.validate().is_err());
    }

    #[test]
    fn test_yaml_defaults_fill_missing_modes() {
        let themes: ThemePair = serde_yaml::from_str("dark: github-dark").unwrap();
        assert_eq!(themes.dark, "github-dark");
        assert_eq!(themes.light, "min-light");
    }
}
