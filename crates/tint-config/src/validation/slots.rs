//! Slot default validation.

use tint_common::types::{SlotColor, SlotKind};

use crate::schema::TintConfig;

use super::helpers::validate_color_value;

/// Each slot color must be inherit or a readable color.
pub(crate) fn validate_slots(errors: &mut Vec<String>, config: &TintConfig) {
    for kind in SlotKind::ALL {
        let slot = match kind {
            SlotKind::Body => &config.slots.body,
            SlotKind::Meta => &config.slots.meta,
            SlotKind::Fixed => &config.slots.fixed,
        };
        if let SlotColor::Value(color) = SlotColor::from(slot.color.as_str()) {
            validate_color_value(errors, &format!("slots.{kind}.color"), &color);
        }
    }
}
