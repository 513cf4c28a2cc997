//! Picker controller state.
//!
//! One struct owns everything the page needs between edits: the three
//! slots, the colors each picker offers as its "initial" preset, and the
//! settings. Edits go through [`ControllerState::apply`], which returns the
//! next state plus the [`Effect`]s the presentation layer should carry out.

mod reducer;

#[cfg(test)]
mod tests;

use tint_colors::Theme;
use tint_common::types::{SlotKind, SlotSet, SlotState};

use crate::codec::encode_query;
use crate::decode::{decode_params, initial_color, COMPLEMENT_DEGREES};
use crate::presets::{body_complement, slot_presets, PresetKeywords, BOOTSTRAP_PALETTE};
use crate::query::QueryParams;
use crate::snippet::{generate_snippet, page_theme};

/// Fixed inputs to the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    /// Color and enabled flag used for slots missing from the query.
    pub defaults: SlotSet,
    /// Hue rotation for autofill and the `complement` preset.
    pub complement_degrees: f64,
    /// Swatches every picker offers.
    pub palette: Vec<String>,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            defaults: SlotSet {
                body: SlotState::new("#0088FF", true),
                meta: SlotState::new("#363636", false),
                fixed: SlotState::new("#FFCC33", true),
            },
            complement_degrees: COMPLEMENT_DEGREES,
            palette: BOOTSTRAP_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// A user action on one of the pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// The picker or text field produced a new value.
    Input { slot: SlotKind, value: String },
    /// The text field lost focus with this raw value.
    Blur { slot: SlotKind, value: String },
    /// The slot's checkbox changed.
    Toggle { slot: SlotKind, checked: bool },
}

/// Something the presentation layer should do after an edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Replace the page URL's query string.
    QueryChanged(String),
    /// Replace the generated code example.
    SnippetChanged(String),
    /// Switch the page between light and dark presentation.
    ThemeChanged(Theme),
    /// Rebuild a picker with new preset keywords and its swatch palette.
    PresetsChanged {
        slot: SlotKind,
        presets: PresetKeywords,
        palette: Vec<String>,
    },
    /// Clear the text field without touching the slot.
    InputCleared(SlotKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    settings: ControllerSettings,
    slots: SlotSet,
    initial_body: String,
    initial_meta: String,
    initial_fixed: String,
}

impl ControllerState {
    /// Start from a page query string.
    pub fn from_query(query: &str, settings: ControllerSettings) -> Self {
        let params = QueryParams::parse(query);
        let decoded = decode_params(&params, settings.complement_degrees);
        let slots = decoded.resolve(&settings.defaults);

        let initial = |kind: SlotKind| {
            let default = settings.defaults.get(kind).color.as_color().unwrap_or("");
            initial_color(params.get(kind.param_key()), default)
        };

        Self {
            initial_body: initial(SlotKind::Body),
            initial_meta: initial(SlotKind::Meta),
            initial_fixed: initial(SlotKind::Fixed),
            slots,
            settings,
        }
    }

    pub fn slots(&self) -> &SlotSet {
        &self.slots
    }

    pub fn palette(&self) -> &[String] {
        &self.settings.palette
    }

    /// The "initial" preset color of a slot.
    pub fn initial(&self, kind: SlotKind) -> &str {
        match kind {
            SlotKind::Body => &self.initial_body,
            SlotKind::Meta => &self.initial_meta,
            SlotKind::Fixed => &self.initial_fixed,
        }
    }

    pub fn query(&self) -> String {
        encode_query(&self.slots)
    }

    pub fn snippet(&self) -> String {
        generate_snippet(&self.slots)
    }

    pub fn theme(&self) -> Theme {
        page_theme(&self.slots)
    }

    pub fn presets(&self, kind: SlotKind) -> PresetKeywords {
        let default = self.settings.defaults.get(kind).color.as_color().unwrap_or("");
        let complement = body_complement(
            self.slots.body.color.as_color(),
            self.settings.defaults.body.color.as_color().unwrap_or(""),
            self.settings.complement_degrees,
        );
        slot_presets(kind, default, self.initial(kind), complement.as_deref())
    }

    /// Every effect needed to paint the current state from scratch.
    pub fn render(&self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::QueryChanged(self.query()),
            Effect::SnippetChanged(self.snippet()),
            Effect::ThemeChanged(self.theme()),
        ];
        effects.extend(SlotKind::ALL.into_iter().map(|slot| self.presets_changed(slot)));
        effects
    }

    fn presets_changed(&self, slot: SlotKind) -> Effect {
        Effect::PresetsChanged {
            slot,
            presets: self.presets(slot),
            palette: self.settings.palette.clone(),
        }
    }
}
