//! Slot <-> query fragment codec.
//!
//! Current encoding: a bare hex when the slot is enabled, `0,<hex>` when it
//! is disabled. The decoder also reads the older `1,<hex>` / `0,<hex>` form
//! and bare `r,g,b` triples; the encoder never writes them.

use tint_colors::{color_to_rgb, expand_hex, is_hex_format, is_rgb_format, normalize_hex};
use tint_common::types::{SlotColor, SlotKind, SlotSet, SlotState};
use url::form_urlencoded;

use crate::patterns::{PARAM_HEX_RE, RGB_TRIPLE_RE};

/// Encode one slot's 6-digit hex (no `#`) and enabled flag.
pub fn encode_slot(hex: &str, enabled: bool) -> String {
    if enabled {
        hex.to_string()
    } else {
        format!("0,{hex}")
    }
}

/// The 6-digit lowercase hex (no `#`) a slot color is written as.
///
/// `inherit` is written as an empty string. `rgb()` colors are converted so
/// the query stays in hex; anything else is coerced like malformed hex.
pub fn slot_hex(color: &SlotColor) -> String {
    let Some(color) = color.as_color() else {
        return String::new();
    };

    let hex = if is_hex_format(color) {
        normalize_hex(color)
    } else if is_rgb_format(color) {
        match color_to_rgb(color) {
            Some(rgb) => rgb.to_hex(),
            None => normalize_hex(color),
        }
    } else {
        normalize_hex(color)
    };

    let digits = expand_hex(&hex);
    form_urlencoded::byte_serialize(digits.as_bytes()).collect()
}

/// Build `?b=<body>&f=<fixed>&m=<meta>`.
pub fn encode_query(slots: &SlotSet) -> String {
    let fragments: Vec<String> = SlotKind::QUERY_ORDER
        .iter()
        .map(|&kind| {
            let state = slots.get(kind);
            format!(
                "{}={}",
                kind.param_key(),
                encode_slot(&slot_hex(&state.color), state.checked)
            )
        })
        .collect();
    format!("?{}", fragments.join("&"))
}

fn is_off_word(s: &str) -> bool {
    s.eq_ignore_ascii_case("false") || s.eq_ignore_ascii_case("none")
}

fn hex_color(digits: &str) -> SlotColor {
    SlotColor::value(format!("#{}", expand_hex(digits)))
}

/// Decode one parameter value. Never fails: unreadable input becomes a
/// literal (lowercased) color.
pub fn decode_param(param: Option<&str>) -> SlotState {
    let Some(raw) = param else {
        return SlotState::inherit();
    };
    if raw.trim().is_empty() || is_off_word(raw) {
        return SlotState::inherit();
    }

    let parts: Vec<&str> = raw.split(',').collect();
    if let [flag, color] = parts.as_slice() {
        let checked = *flag == "1";
        let color = color.trim();
        if color.is_empty() {
            return SlotState::new(SlotColor::Inherit, checked);
        }
        if PARAM_HEX_RE.is_match(color) {
            return SlotState::new(hex_color(color), checked);
        }
        return SlotState::new(color.to_lowercase(), checked);
    }

    if PARAM_HEX_RE.is_match(raw) {
        SlotState::new(hex_color(raw), true)
    } else if RGB_TRIPLE_RE.is_match(raw) {
        SlotState::new(format!("rgb({raw})"), true)
    } else {
        SlotState::new(raw.to_lowercase(), true)
    }
}
