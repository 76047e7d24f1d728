//! The closed theme variant set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::palette::{self, Palette};
use crate::error::NoMatchingVariant;

/// A UI theme with fixed text color attributes.
///
/// Each variant carries a canonical lowercase name used when resolving raw
/// input, plus primary and secondary text color keys. The set is closed and
/// all attribute lookups are pure functions over `'static` data.
///
/// # Example
///
/// ```rust
/// use themeset::Theme;
///
/// let theme = Theme::resolve("dark").unwrap();
/// assert_eq!(theme.name(), "dark");
/// assert_eq!(theme.text_primary(), "#text_primary_dark");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Every variant, in declaration order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Canonical name used for resolution and display.
    pub const fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Primary text color key for this variant.
    pub const fn text_primary(&self) -> &'static str {
        self.palette().text_primary
    }

    /// Secondary text color key for this variant.
    pub const fn text_secondary(&self) -> &'static str {
        self.palette().text_secondary
    }

    const fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &palette::LIGHT,
            Theme::Dark => &palette::DARK,
        }
    }

    /// Resolves a raw name to its variant.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatchingVariant`] when no canonical name equals `raw`.
    pub fn resolve(raw: &str) -> Result<Theme, NoMatchingVariant> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == raw)
            .ok_or_else(|| NoMatchingVariant {
                value: raw.to_string(),
            })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = NoMatchingVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::resolve(s)
    }
}
