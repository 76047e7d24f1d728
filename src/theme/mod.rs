//! Theme variants and their palette attributes.
//!
//! This module provides:
//!
//! - [`Theme`]: the closed variant set with canonical names and text color keys
//! - [`ColorMode`]: the OS light/dark preference, with an overridable detector
//!
//! Variants and their attributes are fixed `'static` data; lookups are pure
//! and infallible.

mod adaptive;
mod palette;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_color_mode_detector, ColorMode};
pub use theme::Theme;
