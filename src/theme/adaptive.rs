//! OS color mode detection with an overridable detector.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl From<ColorMode> for Theme {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Theme::Light,
            ColorMode::Dark => Theme::Dark,
        }
    }
}

type ColorModeDetector = fn() -> ColorMode;

static DETECTOR: Lazy<Mutex<ColorModeDetector>> = Lazy::new(|| Mutex::new(os_detector));

/// Overrides the detector used to determine the preferred color mode.
///
/// This is useful for testing or when you want to force a specific mode.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Returns the current color mode using the installed detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_detector() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}
