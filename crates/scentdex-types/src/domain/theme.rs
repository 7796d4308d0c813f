use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Display theme preference.
///
/// `Light` is the implicit default and is never written to the store;
/// anything else is kept by name so custom palettes survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Named(String),
}

impl Theme {
    pub fn name(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Named(name) => name,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Theme::Light)
    }

    pub fn is_dark(&self) -> bool {
        !matches!(self, Theme::Light)
    }

    /// Light <-> dark. A named theme toggles back to light.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark | Theme::Named(_) => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "" => Err(Error::InvalidTheme(s.to_string())),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Ok(Theme::Named(name)),
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.name().to_string()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_named_themes() {
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(
            "Solarized".parse::<Theme>().unwrap(),
            Theme::Named("solarized".to_string())
        );
        assert!("  ".parse::<Theme>().is_err());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Named("sepia".into()).toggled(), Theme::Light);
    }
}
