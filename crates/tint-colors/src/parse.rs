//! Reading color strings into RGB.
//!
//! [`color_to_rgb`] is the lenient reader used for derived colors;
//! [`parse_color`] is strict and reports why a value was rejected, which is
//! what configuration validation wants.

use tint_common::types::Rgb;
use tint_common::ColorError;

use crate::hex::{hex_to_rgb, is_hex_format, normalize_hex};
use crate::patterns::RGB_STRICT_RE;
use crate::rgb::{is_rgb_format, rgb_channels};

/// RGB of a hex (any of 3/4/6/8 digits, alpha ignored) or `rgb()` color.
pub fn color_to_rgb(color: &str) -> Option<Rgb> {
    let color = color.trim();
    if is_rgb_format(color) {
        rgb_channels(color)
    } else if is_hex_format(color) {
        hex_to_rgb(&normalize_hex(color))
    } else {
        None
    }
}

/// Parse a color string into an [`Rgb`].
///
/// Accepted formats:
/// - hex with 3, 4, 6, or 8 digits, `#` optional (alpha is dropped)
/// - `rgb(r,g,b)` / `rgba(r,g,b,a)` with channels 0-255
pub fn parse_color(s: &str) -> Result<Rgb, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if is_hex_format(s) {
        return hex_to_rgb(&normalize_hex(s)).ok_or_else(|| ColorError::InvalidHex(s.into()));
    }
    if s.starts_with('#') {
        return Err(ColorError::InvalidHex(s.into()));
    }

    if s.to_ascii_lowercase().starts_with("rgb") {
        return parse_rgb_strict(s).ok_or_else(|| ColorError::InvalidRgb(s.into()));
    }

    Err(ColorError::Unrecognized(s.into()))
}

/// Whether `s` is a color [`parse_color`] accepts.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_ok()
}

fn parse_rgb_strict(s: &str) -> Option<Rgb> {
    let caps = RGB_STRICT_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    if let Some(alpha) = caps.get(4) {
        let a: f64 = alpha.as_str().parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
    }
    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_variants() {
        assert_eq!(parse_color("#0088ff"), Ok(Rgb::new(0, 136, 255)));
        assert_eq!(parse_color("08f"), Ok(Rgb::new(0, 136, 255)));
        assert_eq!(parse_color("#0088ff80"), Ok(Rgb::new(0, 136, 255)));
        assert_eq!(parse_color(" #FC3 "), Ok(Rgb::new(255, 204, 51)));
    }

    #[test]
    fn parse_rgb_variants() {
        assert_eq!(parse_color("rgb(10,20,30)"), Ok(Rgb::new(10, 20, 30)));
        assert_eq!(parse_color("rgba( 0 , 212 , 255 , 0.12 )"), Ok(Rgb::new(0, 212, 255)));
    }

    #[test]
    fn parse_errors_name_the_input() {
        assert_eq!(parse_color(""), Err(ColorError::Empty));
        assert_eq!(parse_color("#12345"), Err(ColorError::InvalidHex("#12345".into())));
        assert_eq!(
            parse_color("rgb(300,0,0)"),
            Err(ColorError::InvalidRgb("rgb(300,0,0)".into()))
        );
        assert_eq!(
            parse_color("rgba(0,0,0,2)"),
            Err(ColorError::InvalidRgb("rgba(0,0,0,2)".into()))
        );
        assert_eq!(
            parse_color("not-a-color"),
            Err(ColorError::Unrecognized("not-a-color".into()))
        );
    }

    #[test]
    fn validate_accepts_and_rejects() {
        assert!(validate_color("#0d6efd"));
        assert!(validate_color("rgba(255,255,255,1.0)"));
        assert!(!validate_color("rgb(10,20)"));
        assert!(!validate_color("inherit"));
    }

    #[test]
    fn lenient_reader() {
        assert_eq!(color_to_rgb("rgb(1 2 3)"), Some(Rgb::new(1, 2, 3)));
        assert_eq!(color_to_rgb("#abcd"), Some(Rgb::new(170, 187, 204)));
        assert_eq!(color_to_rgb("inherit"), None);
    }
}
