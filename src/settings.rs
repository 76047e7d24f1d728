//! Validated settings model.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::theme::{detect_color_mode, Theme};

/// Input accepted by [`Settings::with_theme`]: either an already-resolved
/// variant or a raw name still needing validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeArg {
    /// A resolved variant, bound directly without re-resolution.
    Variant(Theme),
    /// A raw name to resolve against the canonical variant names.
    Raw(String),
}

impl From<Theme> for ThemeArg {
    fn from(theme: Theme) -> Self {
        ThemeArg::Variant(theme)
    }
}

impl From<&str> for ThemeArg {
    fn from(raw: &str) -> Self {
        ThemeArg::Raw(raw.to_string())
    }
}

impl From<String> for ThemeArg {
    fn from(raw: String) -> Self {
        ThemeArg::Raw(raw)
    }
}

/// Validated application settings.
///
/// After construction `theme` always holds a resolved [`Theme`] variant;
/// raw strings never survive validation.
///
/// # Example
///
/// ```rust
/// use themeset::{Settings, Theme};
///
/// let settings = Settings::with_theme("light").unwrap();
/// assert_eq!(settings.theme, Theme::Light);
///
/// let settings = Settings::new();
/// assert_eq!(settings.theme, Theme::Light);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Active theme, defaulting to [`Theme::Light`].
    #[serde(default)]
    pub theme: Theme,
}

impl Settings {
    /// Creates settings with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates settings from a variant or a raw theme name.
    ///
    /// Raw names go through [`Theme::resolve`]; already-resolved variants
    /// bind directly.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the field, the offending value,
    /// and the reason when a raw name matches no variant. No settings value
    /// is produced on failure.
    pub fn with_theme(theme: impl Into<ThemeArg>) -> Result<Self, ValidationError> {
        let theme = match theme.into() {
            ThemeArg::Variant(theme) => theme,
            ThemeArg::Raw(raw) => Theme::resolve(&raw).map_err(|_| ValidationError {
                field: "theme",
                value: raw,
                reason: "no matching variant".to_string(),
            })?,
        };
        Ok(Self { theme })
    }

    /// Creates settings themed after the detected OS color mode.
    pub fn adaptive() -> Self {
        Self {
            theme: detect_color_mode().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{set_color_mode_detector, ColorMode};
    use serial_test::serial;

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(Settings::new().theme, Theme::Light);
        assert_eq!(Settings::default().theme, Theme::Light);
    }

    #[test]
    fn test_with_theme_raw_light() {
        let settings = Settings::with_theme("light").unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.theme.text_primary(), "#text_primary_light");
    }

    #[test]
    fn test_with_theme_raw_dark() {
        let settings = Settings::with_theme("dark").unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.theme.text_secondary(), "#text_primary_dark");
    }

    #[test]
    fn test_with_theme_raw_string() {
        let settings = Settings::with_theme(String::from("dark")).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_with_theme_variant_binds_directly() {
        let settings = Settings::with_theme(Theme::Dark).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(
            settings.theme.text_primary(),
            Theme::Dark.text_primary()
        );
    }

    #[test]
    fn test_with_theme_invalid_name() {
        let err = Settings::with_theme("invalid").unwrap_err();
        assert_eq!(err.field, "theme");
        assert_eq!(err.value, "invalid");
        assert_eq!(err.reason, "no matching variant");
    }

    #[test]
    #[serial]
    fn test_adaptive_follows_detector() {
        set_color_mode_detector(|| ColorMode::Dark);
        assert_eq!(Settings::adaptive().theme, Theme::Dark);

        set_color_mode_detector(|| ColorMode::Light);
        assert_eq!(Settings::adaptive().theme, Theme::Light);
    }
}
