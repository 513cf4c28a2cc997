//! Default state for the three theme-color slots.

use serde::{Deserialize, Deserializer, Serialize};
use tint_common::types::{SlotSet, SlotState};

/// One slot's default color and enabled flag.
///
/// An empty `color` or `"inherit"` means the slot starts without a color.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SlotConfig {
    pub color: String,
    pub enabled: bool,
}

impl SlotConfig {
    fn new(color: &str, enabled: bool) -> Self {
        Self {
            color: color.into(),
            enabled,
        }
    }

    pub fn to_state(&self) -> SlotState {
        SlotState::new(self.color.clone(), self.enabled)
    }

    fn patch(&mut self, partial: PartialSlot) {
        if let Some(color) = partial.color {
            self.color = color;
        }
        if let Some(enabled) = partial.enabled {
            self.enabled = enabled;
        }
    }
}

/// `[slots.body]`, `[slots.meta]`, `[slots.fixed]`.
///
/// Each table may set either field; the other keeps that slot's own default,
/// so `[slots.meta]` with only a color leaves meta disabled.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SlotsConfig {
    pub body: SlotConfig,
    pub meta: SlotConfig,
    pub fixed: SlotConfig,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            body: SlotConfig::new("#0088FF", true),
            meta: SlotConfig::new("#363636", false),
            fixed: SlotConfig::new("#FFCC33", true),
        }
    }
}

impl SlotsConfig {
    pub fn to_slot_set(&self) -> SlotSet {
        SlotSet {
            body: self.body.to_state(),
            meta: self.meta.to_state(),
            fixed: self.fixed.to_state(),
        }
    }
}

#[derive(Deserialize)]
struct PartialSlot {
    color: Option<String>,
    enabled: Option<bool>,
}

#[derive(Deserialize)]
struct PartialSlots {
    body: Option<PartialSlot>,
    meta: Option<PartialSlot>,
    fixed: Option<PartialSlot>,
}

impl<'de> Deserialize<'de> for SlotsConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let partial = PartialSlots::deserialize(deserializer)?;
        let mut slots = SlotsConfig::default();
        for (slot, patch) in [
            (&mut slots.body, partial.body),
            (&mut slots.meta, partial.meta),
            (&mut slots.fixed, partial.fixed),
        ] {
            if let Some(patch) = patch {
                slot.patch(patch);
            }
        }
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_only_table_keeps_slot_enabled_default() {
        let slots: SlotsConfig = toml::from_str("[meta]\ncolor = \"#111111\"\n").unwrap();
        assert_eq!(slots.meta, SlotConfig::new("#111111", false));
        assert_eq!(slots.body, SlotsConfig::default().body);
    }

    #[test]
    fn enabled_only_table_keeps_slot_color_default() {
        let slots: SlotsConfig = toml::from_str("[fixed]\nenabled = false\n").unwrap();
        assert_eq!(slots.fixed, SlotConfig::new("#FFCC33", false));
    }

    #[test]
    fn serialized_slots_read_back() {
        let mut slots = SlotsConfig::default();
        slots.meta.enabled = true;
        let text = toml::to_string(&slots).unwrap();
        assert_eq!(toml::from_str::<SlotsConfig>(&text).unwrap(), slots);
    }
}
