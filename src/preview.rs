//! Template-backed preview of a settings value.

use console::Style;
use minijinja::{Environment, Error, Value};
use serde::Serialize;

use crate::settings::Settings;

const PREVIEW_TEMPLATE: &str = "Theme: {{ name | accent }}\n\tprimary text color: {{ text_primary }}\n\tsecondary text color: {{ text_secondary }}";

#[derive(Serialize)]
struct PreviewData {
    name: String,
    text_primary: &'static str,
    text_secondary: &'static str,
}

/// Renders a three-line summary of the settings' theme.
///
/// With `colored` set, the theme name is emphasized with a terminal style;
/// otherwise the output is plain text.
///
/// # Example
///
/// ```rust
/// use themeset::{render_preview, Settings};
///
/// let settings = Settings::with_theme("dark").unwrap();
/// let preview = render_preview(&settings, false).unwrap();
/// assert!(preview.starts_with("Theme: dark"));
/// ```
///
/// # Errors
///
/// Returns a template error if rendering fails.
pub fn render_preview(settings: &Settings, colored: bool) -> Result<String, Error> {
    let mut env = Environment::new();
    env.add_filter("accent", move |value: Value| -> String {
        let text = value.to_string();
        if colored {
            Style::new()
                .bold()
                .force_styling(true)
                .apply_to(text)
                .to_string()
        } else {
            text
        }
    });
    env.add_template("preview", PREVIEW_TEMPLATE)?;

    let theme = settings.theme;
    let data = PreviewData {
        name: theme.to_string(),
        text_primary: theme.text_primary(),
        text_secondary: theme.text_secondary(),
    };
    env.get_template("preview")?.render(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_plain_preview_shape() {
        let settings = Settings::with_theme(Theme::Light).unwrap();
        let preview = render_preview(&settings, false).unwrap();
        assert_eq!(
            preview,
            "Theme: light\n\tprimary text color: #text_primary_light\n\tsecondary text color: #text_secondary_light"
        );
    }

    #[test]
    fn test_plain_preview_dark_values() {
        let settings = Settings::with_theme("dark").unwrap();
        let preview = render_preview(&settings, false).unwrap();
        assert_eq!(
            preview,
            "Theme: dark\n\tprimary text color: #text_primary_dark\n\tsecondary text color: #text_primary_dark"
        );
    }

    #[test]
    fn test_colored_preview_styles_name() {
        let settings = Settings::new();
        let preview = render_preview(&settings, true).unwrap();
        assert!(preview.contains("\x1b[1m"));
        assert!(preview.contains("light"));
    }
}
