//! Whole-query decoding: per-slot decode, complement autofill, and
//! resolution against defaults.

use serde::Serialize;
use tint_colors::{color_to_rgb, rotate_hue};
use tint_common::types::{SlotColor, SlotKind, SlotSet, SlotState};
use tracing::{debug, warn};

use crate::codec::decode_param;
use crate::query::QueryParams;

/// Hue rotation used when one color seeds the other two.
pub const COMPLEMENT_DEGREES: f64 = 180.0;

/// Where a decoded slot's state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotSource {
    /// The slot's own query parameter.
    Param,
    /// Derived from the single color present in the query.
    Autofill,
    /// No parameter; resolution falls back to the default.
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedSlot {
    pub state: SlotState,
    pub source: SlotSource,
}

/// Result of decoding a query string, before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedQuery {
    pub body: DecodedSlot,
    pub meta: DecodedSlot,
    pub fixed: DecodedSlot,
}

impl DecodedQuery {
    pub fn get(&self, kind: SlotKind) -> &DecodedSlot {
        match kind {
            SlotKind::Body => &self.body,
            SlotKind::Meta => &self.meta,
            SlotKind::Fixed => &self.fixed,
        }
    }

    fn get_mut(&mut self, kind: SlotKind) -> &mut DecodedSlot {
        match kind {
            SlotKind::Body => &mut self.body,
            SlotKind::Meta => &mut self.meta,
            SlotKind::Fixed => &mut self.fixed,
        }
    }

    /// Whether the autofill rule filled the other two slots.
    pub fn autofilled(&self) -> bool {
        SlotKind::ALL
            .iter()
            .any(|&k| self.get(k).source == SlotSource::Autofill)
    }

    /// Final slot states: decoded or autofilled slots win, absent slots
    /// take the matching default.
    pub fn resolve(&self, defaults: &SlotSet) -> SlotSet {
        let mut slots = SlotSet::default();
        for kind in SlotKind::ALL {
            let decoded = self.get(kind);
            *slots.get_mut(kind) = match decoded.source {
                SlotSource::Param | SlotSource::Autofill => decoded.state.clone(),
                SlotSource::Absent => defaults.get(kind).clone(),
            };
        }
        slots
    }
}

/// Decode `?b=..&f=..&m=..` with the standard 180° autofill.
pub fn decode_query(query: &str) -> DecodedQuery {
    decode_query_with_rotation(query, COMPLEMENT_DEGREES)
}

/// Decode a query, seeding missing slots with `degrees` of hue rotation.
///
/// The rule only fires when exactly one of `b`, `f`, `m` appears in the
/// query and it carries a real color. Both derived slots get the same
/// rotated color and are checked.
pub fn decode_query_with_rotation(query: &str, degrees: f64) -> DecodedQuery {
    let params = QueryParams::parse(query);
    decode_params(&params, degrees)
}

pub(crate) fn decode_params(params: &QueryParams, degrees: f64) -> DecodedQuery {
    let slot = |kind: SlotKind| {
        let key = kind.param_key();
        DecodedSlot {
            state: decode_param(params.get(key)),
            source: if params.has(key) {
                SlotSource::Param
            } else {
                SlotSource::Absent
            },
        }
    };

    let mut decoded = DecodedQuery {
        body: slot(SlotKind::Body),
        meta: slot(SlotKind::Meta),
        fixed: slot(SlotKind::Fixed),
    };

    let colored: Vec<SlotKind> = SlotKind::ALL
        .into_iter()
        .filter(|&k| !decoded.get(k).state.color.is_inherit())
        .collect();
    let present = SlotKind::ALL
        .iter()
        .filter(|k| params.has(k.param_key()))
        .count();

    if let ([seed], 1) = (colored.as_slice(), present) {
        autofill(&mut decoded, *seed, degrees);
    }

    decoded
}

fn autofill(decoded: &mut DecodedQuery, seed: SlotKind, degrees: f64) {
    let Some(seed_color) = decoded.get(seed).state.color.as_color() else {
        return;
    };
    let Some(rgb) = color_to_rgb(seed_color) else {
        warn!(slot = %seed, color = seed_color, "cannot derive colors from unreadable seed");
        return;
    };
    let Some(derived) = rotate_hue(&rgb.to_hex(), degrees) else {
        return;
    };

    debug!(slot = %seed, seed = seed_color, derived = %derived, "autofilling other slots");
    for kind in SlotKind::ALL.into_iter().filter(|&k| k != seed) {
        *decoded.get_mut(kind) = DecodedSlot {
            state: SlotState::new(derived.clone(), true),
            source: SlotSource::Autofill,
        };
    }
}

/// Color shown as a picker's "initial" preset: the parameter's color if it
/// has one, otherwise `default`.
pub fn initial_color(param: Option<&str>, default: &str) -> String {
    match decode_param(param).color {
        SlotColor::Value(color) => color,
        SlotColor::Inherit => default.to_string(),
    }
}
