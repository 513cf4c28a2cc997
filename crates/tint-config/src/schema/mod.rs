//! Configuration schema types for tint.
//!
//! Sections use `serde(default)` and slot tables fill gaps from each
//! slot's own defaults, so partial configs work correctly.

mod logging;
mod presets;
mod share;
mod slots;

pub use logging::*;
pub use presets::*;
pub use share::*;
pub use slots::*;

use serde::{Deserialize, Serialize};
use tint_params::ControllerSettings;

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Every field has a default; a config file only needs what it changes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TintConfig {
    pub slots: SlotsConfig,
    pub share: ShareConfig,
    pub presets: PresetsConfig,
    pub logging: LoggingConfig,
}

impl TintConfig {
    /// Settings for the picker controller and the query decoder.
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            defaults: self.slots.to_slot_set(),
            complement_degrees: self.presets.complement_degrees,
            palette: self.presets.palette.clone(),
        }
    }
}
