//! Typed theme palettes with validated settings coercion.
//!
//! This crate provides:
//!
//! - [`Theme`]: a closed set of theme variants, each carrying a canonical
//!   name plus primary/secondary text color keys
//! - [`Settings`]: a settings model whose `theme` field is validated and
//!   coerced from raw strings at construction time
//! - [`render_preview`]: a template-backed summary of a settings value
//! - [`ColorMode`]: OS light/dark preference with an overridable detector
//!
//! # Example
//!
//! ```rust
//! use themeset::{Settings, Theme};
//!
//! // Raw names are resolved to variants during construction.
//! let settings = Settings::with_theme("dark").unwrap();
//! assert_eq!(settings.theme, Theme::Dark);
//! assert_eq!(settings.theme.text_primary(), "#text_primary_dark");
//!
//! // Unknown names are rejected; no settings value is produced.
//! assert!(Settings::with_theme("solarized").is_err());
//! ```

mod error;
mod preview;
mod settings;
mod theme;

pub use error::{NoMatchingVariant, ValidationError};
pub use preview::render_preview;
pub use settings::{Settings, ThemeArg};
pub use theme::{detect_color_mode, set_color_mode_detector, ColorMode, Theme};
