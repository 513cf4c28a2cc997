//! Luma-based light/dark theme selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parse::color_to_rgb;

/// Backgrounds at or below this luma get the dark theme.
pub const LUMA_THRESHOLD: f64 = 127.5;

/// Rec. 601 luma (0-255) of a hex or `rgb()` color.
pub fn luma(color: &str) -> Option<f64> {
    let rgb = color_to_rgb(color)?;
    Some(0.299 * rgb.r as f64 + 0.587 * rgb.g as f64 + 0.114 * rgb.b as f64)
}

/// Whether a background of `color` wants the dark theme (light text).
///
/// Ties at the threshold go dark. A color that can't be read picks the
/// light theme.
pub fn select_theme_with_luma(color: &str) -> bool {
    match luma(color) {
        Some(y) => y <= LUMA_THRESHOLD,
        None => {
            tracing::debug!(color, "unreadable color, defaulting to light theme");
            false
        }
    }
}

/// Presentation theme chosen for a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background, light text.
    Dark,
    /// Light background, dark text.
    Light,
}

impl Theme {
    pub fn for_background(color: &str) -> Self {
        if select_theme_with_luma(color) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Class name toggled on `<body>`.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white() {
        assert!(select_theme_with_luma("#000000"));
        assert!(!select_theme_with_luma("#ffffff"));
        assert!(!select_theme_with_luma("#FFFFFF"));
    }

    #[test]
    fn accepts_rgb_and_shorthand() {
        assert!(select_theme_with_luma("rgb(10, 10, 10)"));
        assert!(!select_theme_with_luma("#fc3"));
        assert_eq!(luma("#fff").map(|y| y.round()), Some(255.0));
    }

    #[test]
    fn default_colors() {
        assert_eq!(Theme::for_background("#0088FF"), Theme::Dark);
        assert_eq!(Theme::for_background("#FFCC33"), Theme::Light);
        assert_eq!(Theme::for_background("#363636"), Theme::Dark);
    }

    #[test]
    fn unreadable_color_is_light() {
        assert!(!select_theme_with_luma("inherit"));
        assert_eq!(luma("rgb(300, 0, 0)"), None);
    }

    #[test]
    fn css_class_names() {
        assert_eq!(Theme::Dark.css_class(), "dark-theme");
        assert_eq!(Theme::Light.css_class(), "light-theme");
    }
}
