//! HSL conversion.
//!
//! Hue is in degrees, saturation and lightness in percent. The math follows
//! the usual min/max derivation so that hex -> HSL -> hex is lossless for
//! every 24-bit color.

use tint_common::types::{Hsl, Rgb};

use crate::hex::{hex_to_rgb, rgb_to_hex};

/// Convert an RGB triple to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // achromatic
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert a `#rgb` / `#rrggbb` string to HSL. `None` for invalid hex.
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// Convert HSL to an RGB triple, rounding each channel to nearest.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    // wrap into [0, 1); rem_euclid can land on the upper bound for tiny negatives
    let h = (h.rem_euclid(360.0) / 360.0) % 1.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Convert HSL to `#rrggbb`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let rgb = hsl_to_rgb(h, s, l);
    rgb_to_hex(rgb.r, rgb.g, rgb.b)
}
