//! Theme colors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected theme color input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid theme color `{0}`: expected `#` followed by 6 hex digits")]
pub struct ThemeColorError(pub String);

/// A `#RRGGBB` color applied to a card's header and borders.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor(String);

impl ThemeColor {
    /// Color used when the generator is called without one.
    pub const GENERATOR_DEFAULT: &'static str = "#4F46E5";

    /// Color the command-line tool starts with.
    pub const APP_DEFAULT: &'static str = "#E31837";

    /// Validate a `#RRGGBB` string. Case is preserved.
    pub fn parse(value: &str) -> Result<Self, ThemeColorError> {
        let value = value.trim();
        let valid = value
            .strip_prefix('#')
            .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()));
        if valid {
            Ok(Self(value.to_string()))
        } else {
            Err(ThemeColorError(value.to_string()))
        }
    }

    /// The color as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self(Self::GENERATOR_DEFAULT.to_string())
    }
}

impl std::str::FromStr for ThemeColor {
    type Err = ThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        color.0
    }
}

impl std::fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
