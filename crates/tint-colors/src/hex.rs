//! Hex string helpers: detection, shorthand expansion and contraction,
//! normalization, and conversion to and from RGB.
//!
//! Only [`hex_to_rgb`] validates. The rest are string transforms that
//! accept whatever they are given.

use tint_common::types::Rgb;

use crate::patterns::HEX_RE;

/// Whether `s` is an optional `#` followed by 3, 4, 6, or 8 hex digits.
pub fn is_hex_format(s: &str) -> bool {
    HEX_RE.is_match(s)
}

fn clean(hex: &str) -> String {
    hex.strip_prefix('#').unwrap_or(hex).to_lowercase()
}

fn doubled(chars: &[char]) -> String {
    chars.iter().flat_map(|&c| [c, c]).collect()
}

/// Expand 3-digit shorthand to 6 digits: `08f` -> `0088ff`.
///
/// Strips a leading `#` and lowercases. Any length other than 3 comes back
/// unchanged, so callers validate first.
pub fn expand_hex(hex: &str) -> String {
    let clean = clean(hex);
    let chars: Vec<char> = clean.chars().collect();
    if chars.len() == 3 {
        doubled(&chars)
    } else {
        clean
    }
}

/// Whether a 6-digit hex has the `aabbcc` shape.
pub fn can_shorten_hex(hex: &str) -> bool {
    let chars: Vec<char> = clean(hex).chars().collect();
    chars.len() == 6 && chars[0] == chars[1] && chars[2] == chars[3] && chars[4] == chars[5]
}

/// Shorten `0088ff` to `08f` when possible, otherwise return the lowercased
/// input without its `#`.
pub fn shorten_hex(hex: &str) -> String {
    let clean = clean(hex);
    if can_shorten_hex(&clean) {
        clean.chars().step_by(2).collect()
    } else {
        clean
    }
}

/// Coerce any hex variant to `#rrggbb`.
///
/// 3 digits are expanded, 8 digits lose their alpha pair, 4 digits lose
/// their alpha nibble and are expanded. Anything else is cut to its first
/// six characters; malformed input is not rejected.
pub fn normalize_hex(hex: &str) -> String {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let mut chars: Vec<char> = hex.chars().collect();

    match chars.len() {
        3 => chars = doubled(&chars).chars().collect(),
        4 => chars = doubled(&chars[..3]).chars().collect(),
        8 => chars.truncate(6),
        _ => {}
    }
    chars.truncate(6);

    let body: String = chars.into_iter().collect();
    format!("#{}", body.to_lowercase())
}

/// Any hex variant (with or without `#`) as `#rrggbb`, expanding shorthand.
pub fn to_hex6(hex: &str) -> String {
    format!("#{}", expand_hex(hex))
}

/// Parse `#rgb` / `#rrggbb` (the `#` is optional). `None` for anything else.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let full = match hex.len() {
        3 => expand_hex(hex),
        6 => hex.to_string(),
        _ => return None,
    };

    let r = u8::from_str_radix(&full[0..2], 16).ok()?;
    let g = u8::from_str_radix(&full[2..4], 16).ok()?;
    let b = u8::from_str_radix(&full[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// `#rrggbb` for the given channels.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}
