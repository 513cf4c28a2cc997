//! Color conversion library.
//!
//! Pure functions over color strings: format detection and normalization,
//! hex/RGB/HSL conversion, hue rotation for complementary and triadic
//! suggestions, and luma-based theme selection.
//!
//! Nothing here panics or returns an error on bad input. Hex parsers return
//! `None`; normalizers coerce. [`parse_color`] is the one strict entry point.
//!
//! ```rust
//! use tint_colors::{complementary_color, normalize_color, select_theme_with_luma};
//!
//! assert_eq!(normalize_color("#F0A"), "#ff00aa");
//! assert_eq!(complementary_color("#ff0000").as_deref(), Some("#00ffff"));
//! assert!(select_theme_with_luma("#000000"));
//! ```

mod harmony;
mod hex;
mod hsl;
mod luma;
mod parse;
mod patterns;
mod rgb;


pub use harmony::{complementary_color, rotate_hue, triadic_colors};
pub use hex::{
    can_shorten_hex, expand_hex, hex_to_rgb, is_hex_format, normalize_hex, rgb_to_hex,
    shorten_hex, to_hex6,
};
pub use hsl::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, rgb_to_hsl};
pub use luma::{luma, select_theme_with_luma, Theme, LUMA_THRESHOLD};
pub use parse::{color_to_rgb, parse_color, validate_color};
pub use rgb::{is_rgb_format, normalize_rgb};

/// Normalize a user-entered color.
///
/// `rgb()`/`rgba()` become `rgb(r, g, b)`; hex becomes `#rrggbb`. Anything
/// else is assumed to be malformed hex and coerced the same way.
pub fn normalize_color(value: &str) -> String {
    let s = value.trim();

    if is_rgb_format(s) {
        normalize_rgb(s)
    } else if is_hex_format(s) {
        normalize_hex(s)
    } else {
        tracing::debug!(value = s, "unrecognized color format, coercing as hex");
        normalize_hex(s)
    }
}
