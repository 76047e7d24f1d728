//! Fixed palette table backing each theme variant.

/// Auxiliary text color keys attached to a theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
}

pub(crate) const LIGHT: Palette = Palette {
    text_primary: "#text_primary_light",
    text_secondary: "#text_secondary_light",
};

// The dark palette's secondary slot repeats its primary key.
pub(crate) const DARK: Palette = Palette {
    text_primary: "#text_primary_dark",
    text_secondary: "#text_primary_dark",
};
