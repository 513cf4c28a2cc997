//! Edit handling for [`ControllerState`].

use tint_colors::normalize_color;
use tint_common::types::{SlotColor, SlotKind};
use tracing::debug;

use super::{ControllerState, Edit, Effect};
use crate::patterns::TYPED_HEX_RE;

impl ControllerState {
    /// Apply one edit, returning the next state and what changed.
    ///
    /// An edit that leaves the slots as they were yields no effects, which
    /// is what stops a picker echoing its own update back in a loop.
    pub fn apply(self, edit: Edit) -> (Self, Vec<Effect>) {
        debug!(?edit, "applying edit");
        match edit {
            Edit::Input { slot, value } => self.input(slot, &value),
            Edit::Blur { slot, value } => self.blur(slot, &value),
            Edit::Toggle { slot, checked } => self.toggle(slot, checked),
        }
    }

    fn input(mut self, slot: SlotKind, value: &str) -> (Self, Vec<Effect>) {
        let color = if value.trim().is_empty() {
            SlotColor::Inherit
        } else {
            SlotColor::value(normalize_color(value))
        };

        if self.slots.get(slot).color == color {
            return (self, Vec::new());
        }
        self.slots.get_mut(slot).color = color;

        let effects = self.changed(slot, true);
        (self, effects)
    }

    fn blur(self, slot: SlotKind, value: &str) -> (Self, Vec<Effect>) {
        let value = value.trim();
        if value.eq_ignore_ascii_case(SlotColor::INHERIT) {
            return (self, vec![Effect::InputCleared(slot)]);
        }
        if TYPED_HEX_RE.is_match(value) {
            return self.input(slot, value);
        }
        debug!(%slot, value, "ignoring non-hex text on blur");
        (self, Vec::new())
    }

    fn toggle(mut self, slot: SlotKind, checked: bool) -> (Self, Vec<Effect>) {
        if self.slots.get(slot).checked == checked {
            return (self, Vec::new());
        }
        self.slots.get_mut(slot).checked = checked;

        let effects = self.changed(slot, false);
        (self, effects)
    }

    fn changed(&self, slot: SlotKind, color_changed: bool) -> Vec<Effect> {
        let mut effects = vec![
            Effect::QueryChanged(self.query()),
            Effect::SnippetChanged(self.snippet()),
        ];
        if slot == SlotKind::Body {
            effects.push(Effect::ThemeChanged(self.theme()));
            if color_changed {
                for other in [SlotKind::Fixed, SlotKind::Meta] {
                    effects.push(self.presets_changed(other));
                }
            }
        }
        effects
    }
}
