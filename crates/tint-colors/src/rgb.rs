//! `rgb()` / `rgba()` detection and normalization.

use tint_common::types::Rgb;

use crate::patterns::{RGB_CHANNELS_RE, RGB_PREFIX_RE};

/// Whether `s` is `rgb(...)` or `rgba(...)`, case-insensitive.
pub fn is_rgb_format(s: &str) -> bool {
    RGB_PREFIX_RE.is_match(s)
}

/// Drop any alpha and reformat as `rgb(r, g, b)`.
///
/// Input that doesn't look like an rgb function is returned unchanged.
pub fn normalize_rgb(rgb: &str) -> String {
    match RGB_CHANNELS_RE.captures(rgb) {
        Some(caps) => format!("rgb({}, {}, {})", &caps[1], &caps[2], &caps[3]),
        None => rgb.to_string(),
    }
}

/// Channels of an rgb function. `None` when a channel exceeds 255.
pub(crate) fn rgb_channels(rgb: &str) -> Option<Rgb> {
    let caps = RGB_CHANNELS_RE.captures(rgb)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    Some(Rgb::new(r, g, b))
}
