//! Hue rotations used to suggest coordinated colors.

use crate::hsl::{hex_to_hsl, hsl_to_hex};

/// Rotate a hex color's hue by `degrees`, keeping saturation and lightness.
pub fn rotate_hue(hex: &str, degrees: f64) -> Option<String> {
    let hsl = hex_to_hsl(hex)?.rotated(degrees);
    Some(hsl_to_hex(hsl.h, hsl.s, hsl.l))
}

/// The 180° complement of a hex color.
pub fn complementary_color(hex: &str) -> Option<String> {
    rotate_hue(hex, 180.0)
}

/// `[hex, hex + 120°, hex + 240°]`.
///
/// The first entry is the input as given, not recomputed through HSL.
pub fn triadic_colors(hex: &str) -> Option<[String; 3]> {
    let hsl = hex_to_hsl(hex)?;
    let second = hsl.rotated(120.0);
    let third = hsl.rotated(240.0);
    Some([
        hex.to_string(),
        hsl_to_hex(second.h, second.s, second.l),
        hsl_to_hex(third.h, third.s, third.l),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_of_red_is_cyan() {
        assert_eq!(complementary_color("#ff0000").as_deref(), Some("#00ffff"));
    }

    #[test]
    fn complement_of_default_body() {
        // #0088ff sits at 208°; its complement lands at 28°
        assert_eq!(complementary_color("#0088ff").as_deref(), Some("#ff7700"));
    }

    #[test]
    fn complement_of_grey_is_itself() {
        assert_eq!(complementary_color("#363636").as_deref(), Some("#363636"));
    }

    #[test]
    fn complement_propagates_invalid() {
        assert_eq!(complementary_color("#zzzzzz"), None);
        assert_eq!(rotate_hue("", 90.0), None);
    }

    #[test]
    fn triad_keeps_seed_verbatim() {
        let triad = triadic_colors("#FF0000").unwrap();
        assert_eq!(triad[0], "#FF0000");
        assert_eq!(triad[1], "#00ff00");
        assert_eq!(triad[2], "#0000ff");
    }

    #[test]
    fn triad_of_invalid_is_none() {
        assert!(triadic_colors("#12").is_none());
    }

    #[test]
    fn full_turn_is_identity() {
        assert_eq!(rotate_hue("#3d8bfd", 360.0).as_deref(), Some("#3d8bfd"));
    }
}
